#![allow(dead_code)]

use periplo_planner::activity::{
    activity::Activity, activity_limits::ActivityLimits, shared_activity::SharedActivity,
};

pub const LIMITS: ActivityLimits = ActivityLimits {
    max_resources: 3,
    max_comments: 2,
};

pub fn create_activity(name: &str, duration_minutes: u32, price: f64) -> SharedActivity {
    let mut activity = Activity::new(name, LIMITS).unwrap();
    activity.set_description(format!("About {name}"));
    activity.set_price(price).unwrap();
    activity.set_duration_minutes(duration_minutes).unwrap();

    SharedActivity::new(activity)
}

pub fn create_detailed_activity(
    name: &str,
    duration_minutes: u32,
    price: f64,
    resources: &[&str],
    comments: &[&str],
) -> SharedActivity {
    let activity = create_activity(name, duration_minutes, price);
    for resource in resources {
        activity.borrow_mut().append_resource(*resource).unwrap();
    }
    for comment in comments {
        activity.borrow_mut().append_comment(*comment).unwrap();
    }

    activity
}
