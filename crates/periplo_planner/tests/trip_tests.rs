use periplo_planner::{
    activity::price::Price,
    catalog::activity_catalog::ActivityCatalog,
    time::start_time::StartTime,
    trip::{schedule_error::ScheduleError, trip::Trip},
};

mod setup;

fn assert_day_is_consistent(trip: &Trip, day: usize) {
    let placements = trip.placements_for_day(day);

    for pair in placements.windows(2) {
        assert!(pair[0].start() <= pair[1].start(), "day {day} is not sorted");
    }

    for (i, first) in placements.iter().enumerate() {
        for second in placements.iter().skip(i + 1) {
            let a = first.interval();
            let b = second.interval();
            assert!(
                a.end <= b.start || b.end <= a.start,
                "{a:?} and {b:?} overlap on day {day}"
            );
        }
    }
}

#[test]
fn test_day_stays_sorted_and_disjoint() {
    let mut trip = Trip::new(3, 12);
    let durations = [45, 90, 30, 120, 15, 60, 75];

    // Walks start times through the day with a stride coprime to the grid so
    // that accepted and rejected placements interleave.
    let mut slot = 7;
    for step in 0..60 {
        slot = (slot + 37) % 96;
        let start = StartTime::from_minutes(slot * 15).unwrap();
        let activity =
            setup::create_activity(&format!("Step {step}"), durations[step % durations.len()], 1.0);
        let day = step % 3;
        let before = trip.placements_for_day(day);

        match trip.place_activity(day, &activity, start) {
            Ok(()) => assert_eq!(trip.day_len(day), before.len() + 1),
            Err(ScheduleError::Overlap { .. }) | Err(ScheduleError::DayFull { .. }) => {
                assert_eq!(trip.placements_for_day(day), before)
            }
            Err(error) => panic!("unexpected error {error}"),
        }

        assert_day_is_consistent(&trip, day);
    }

    assert!(trip.total_placements() > 0);
}

#[test]
fn test_full_day_reports_day_full_even_without_overlap() {
    let mut trip = Trip::new(1, 1);
    let morning = setup::create_activity("Morning", 30, 0.0);
    let evening = setup::create_activity("Evening", 30, 0.0);

    trip.place_activity(0, &morning, "08:00".parse().unwrap())
        .unwrap();

    assert_eq!(
        trip.place_activity(0, &evening, "20:00".parse().unwrap()),
        Err(ScheduleError::DayFull { day: 0, capacity: 1 })
    );
}

#[test]
fn test_trip_sees_catalog_edits_and_survives_removal() {
    let mut catalog = ActivityCatalog::new(2);
    let mut trip = Trip::new(1, 2);
    let kayak = setup::create_activity("Kayak", 60, 20.0);
    catalog.add(kayak.clone()).unwrap();

    let found = catalog.search_by_name("kay");
    trip.place_activity(0, &found[0], "10:00".parse().unwrap())
        .unwrap();

    kayak.borrow_mut().set_price(35.0).unwrap();
    assert_eq!(trip.total_price(), Price::new(35.0).unwrap());

    assert!(catalog.remove(&kayak));
    assert!(catalog.is_empty());
    assert_eq!(trip.day_len(0), 1);
    assert_eq!(trip.activities_for_day(0)[0], kayak);

    assert!(trip.remove_placement(0, "10:00"));
    assert_eq!(trip.total_placements(), 0);
}

#[test]
fn test_activity_running_past_midnight() {
    let mut trip = Trip::new(1, 3);
    let party = setup::create_activity("Party", 180, 0.0);
    let late_snack = setup::create_activity("Snack", 15, 0.0);

    trip.place_activity(0, &party, "22:30".parse().unwrap())
        .unwrap();

    assert!(matches!(
        trip.place_activity(0, &late_snack, "23:45".parse().unwrap()),
        Err(ScheduleError::Overlap { .. })
    ));
    assert!(
        trip.place_activity(0, &late_snack, "00:00".parse().unwrap())
            .is_ok()
    );
}
