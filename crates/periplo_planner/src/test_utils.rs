use crate::activity::{
    activity::Activity, activity_limits::ActivityLimits, shared_activity::SharedActivity,
};

pub fn create_activity(
    name: &str,
    duration_minutes: u32,
    price: f64,
    resources: &[&str],
    comments: &[&str],
) -> Activity {
    let limits = ActivityLimits::new(resources.len().max(2), comments.len().max(2));
    let mut activity = Activity::new(name, limits).unwrap();
    activity.set_description(format!("{name} tour"));
    activity.set_price(price).unwrap();
    activity.set_duration_minutes(duration_minutes).unwrap();
    for resource in resources {
        activity.append_resource(*resource).unwrap();
    }
    for comment in comments {
        activity.append_comment(*comment).unwrap();
    }

    activity
}

pub fn create_shared_activity(name: &str, duration_minutes: u32, price: f64) -> SharedActivity {
    SharedActivity::new(create_activity(name, duration_minutes, price, &[], &[]))
}
