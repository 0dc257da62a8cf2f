use std::io::{BufRead, Write};

use comfy_table::Table;
use periplo_planner::{
    activity::{activity::Activity, activity_error::ActivityError, shared_activity::SharedActivity},
    catalog::activity_catalog::ActivityCatalog,
    time::duration_format::format_duration,
};
use tracing::debug;

use crate::{
    prompt::{Prompt, PromptError, PromptResult},
    session::Session,
};

/// Ends a list of resources or comments.
const FINISH: &str = "fin";
/// Leaves the activity search.
const BACK: &str = "-FIN-";

enum MenuFlow {
    Continue,
    Exit,
}

/// Runs the main menu until the user exits or the input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    loop {
        match main_menu(session, prompt) {
            Ok(MenuFlow::Continue) => prompt.say("")?,
            Ok(MenuFlow::Exit) | Err(PromptError::EndOfInput) => return Ok(()),
            Err(PromptError::Io(error)) => return Err(error.into()),
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<MenuFlow> {
    prompt.say("--- Main menu ---")?;
    prompt.say("1. Add activity")?;
    prompt.say("2. Consult/edit activity")?;
    prompt.say("3. Save activities")?;
    prompt.say("4. Load activities")?;
    prompt.say("5. Plan trip")?;
    prompt.say("6. Remove planned activity")?;
    prompt.say("7. Save itinerary")?;
    prompt.say("8. Exit")?;

    let option: u8 = prompt.ask_number("Choose an option: ", 1..=8)?;
    debug!(option, "Main menu");

    match option {
        1 => add_activity(session, prompt)?,
        2 => consult_activity(session, prompt)?,
        3 => save_activities(session, prompt)?,
        4 => load_activities(session, prompt)?,
        5 => plan_trip(session, prompt)?,
        6 => remove_planned_activity(session, prompt)?,
        7 => save_itinerary(session, prompt)?,
        _ => return Ok(MenuFlow::Exit),
    }

    Ok(MenuFlow::Continue)
}

fn add_activity<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    let mut activity = loop {
        let name = prompt.ask("Activity name: ")?;
        match Activity::new(name, session.limits) {
            Ok(activity) => break activity,
            Err(error) => prompt.say(error)?,
        }
    };

    let description = prompt.ask("Description: ")?;
    activity.set_description(description);

    let price = prompt.ask_amount("Price (€): ")?;
    if let Err(error) = activity.set_price(price) {
        prompt.say(error)?;
    }

    let minutes: u32 = prompt.ask_number("Duration (minutes): ", 1..=u32::MAX)?;
    if let Err(error) = activity.set_duration_minutes(minutes) {
        prompt.say(error)?;
    }

    prompt.say("Enter the resources (one per line, 'fin' to finish):")?;
    while !activity.is_resources_full() {
        let line = prompt.read_line()?;
        if line == FINISH {
            break;
        }
        match activity.append_resource(line) {
            Ok(()) => {}
            Err(ActivityError::InvalidValue) => prompt.say("A resource cannot be empty.")?,
            Err(error) => {
                prompt.say(error)?;
                break;
            }
        }
    }

    prompt.say("Enter the comments (one per line, 'fin' to finish):")?;
    while !activity.is_comments_full() {
        let line = prompt.read_line()?;
        if line == FINISH {
            break;
        }
        match activity.append_comment(line) {
            Ok(()) => {}
            Err(ActivityError::InvalidValue) => prompt.say("A comment cannot be empty.")?,
            Err(error) => {
                prompt.say(error)?;
                break;
            }
        }
    }

    match session.catalog.add(SharedActivity::new(activity)) {
        Ok(()) => prompt.say("Activity added."),
        Err(error) => prompt.say(error),
    }
}

fn consult_activity<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    let Some(activity) = find_activity(&session.catalog, prompt)? else {
        return Ok(());
    };

    loop {
        prompt.say("")?;
        prompt.say(activity.borrow().render_human())?;
        prompt.say("1. Add resource")?;
        prompt.say("2. Add comment")?;
        prompt.say("3. Delete activity")?;
        prompt.say("4. Back")?;

        let option: u8 = prompt.ask_number("Choose an option: ", 1..=4)?;
        match option {
            1 => {
                let resource = prompt.ask("Resource to add: ")?;
                let result = activity.borrow_mut().append_resource(resource);
                match result {
                    Ok(()) => prompt.say("Resource added.")?,
                    Err(ActivityError::InvalidValue) => prompt.say("A resource cannot be empty.")?,
                    Err(error) => prompt.say(error)?,
                }
            }
            2 => {
                let comment = prompt.ask("Comment to add: ")?;
                let result = activity.borrow_mut().append_comment(comment);
                match result {
                    Ok(()) => prompt.say("Comment added.")?,
                    Err(ActivityError::InvalidValue) => prompt.say("A comment cannot be empty.")?,
                    Err(error) => prompt.say(error)?,
                }
            }
            3 => {
                if session.catalog.remove(&activity) {
                    prompt.say("Activity deleted.")?;
                }
                return Ok(());
            }
            _ => return Ok(()),
        }
    }
}

/// Searches the catalog until the user picks an activity or goes back.
fn find_activity<R: BufRead, W: Write>(
    catalog: &ActivityCatalog,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<Option<SharedActivity>> {
    if catalog.is_empty() {
        prompt.say("The catalog is empty.")?;
        return Ok(None);
    }

    loop {
        let query = prompt.ask(&format!("Text of the activity to search for ({BACK} to go back): "))?;
        if query == BACK {
            return Ok(None);
        }

        let matches = catalog.search_by_name(&query);
        if matches.is_empty() {
            prompt.say("No activities found.")?;
            continue;
        }

        prompt.say("Activities found:")?;
        prompt.say(activity_table(&matches))?;
        let choice: usize = prompt.ask_number("Choose an activity: ", 1..=matches.len())?;

        return Ok(matches.into_iter().nth(choice - 1));
    }
}

fn activity_table(activities: &[SharedActivity]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Activity", "Duration", "Price"]);

    for (index, activity) in activities.iter().enumerate() {
        let activity = activity.borrow();
        table.add_row(vec![
            (index + 1).to_string(),
            activity.name().to_string(),
            format_duration(activity.duration()),
            activity.price().to_string(),
        ]);
    }

    table
}

fn save_activities<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    let path = prompt.ask("File to save the activities to: ")?;
    match session.catalog.save_all(&path) {
        Ok(()) => prompt.say(format!("Activities saved to {path}")),
        Err(error) => prompt.say(format!("{:#}", anyhow::Error::from(error))),
    }
}

fn load_activities<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    let path = prompt.ask("File to load the activities from: ")?;
    match session.catalog.load_all(&path, session.limits) {
        Ok(added) => prompt.say(format!("{added} activities loaded.")),
        Err(error) => prompt.say(format!("{:#}", anyhow::Error::from(error))),
    }
}

fn ask_day<R: BufRead, W: Write>(
    session: &Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<Option<usize>> {
    let num_days = session.trip.num_days();
    if num_days == 0 {
        prompt.say("The trip has no days.")?;
        return Ok(None);
    }

    let day = prompt.ask_number(&format!("Day of the trip (1-{num_days}): "), 1..=num_days)?;
    Ok(Some(day - 1))
}

fn plan_trip<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    prompt.say("Trip planning:")?;
    prompt.say(session.trip.render_itinerary())?;

    let Some(day) = ask_day(session, prompt)? else {
        return Ok(());
    };
    let start = prompt.ask_start_time("Start time (HH:MM): ")?;
    let Some(activity) = find_activity(&session.catalog, prompt)? else {
        return Ok(());
    };

    match session.trip.place_activity(day, &activity, start) {
        Ok(()) => prompt.say(format!("Activity planned for day {} at {start}.", day + 1)),
        Err(error) => prompt.say(error),
    }
}

fn remove_planned_activity<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    let Some(day) = ask_day(session, prompt)? else {
        return Ok(());
    };
    let start = prompt.ask_start_time("Start time (HH:MM): ")?;

    if session.trip.remove_placement(day, &start.to_string()) {
        prompt.say("Planned activity removed.")
    } else {
        prompt.say(format!("Nothing is planned on day {} at {start}.", day + 1))
    }
}

fn save_itinerary<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
) -> PromptResult<()> {
    let path = prompt.ask("File to save the itinerary to: ")?;
    match session.trip.save_itinerary(&path) {
        Ok(()) => prompt.say(format!("Itinerary saved to {path}")),
        Err(error) => prompt.say(format!("{:#}", anyhow::Error::from(error))),
    }
}
