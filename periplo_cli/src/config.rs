use std::path::PathBuf;

use clap::Args;
use periplo_planner::activity::activity_limits::ActivityLimits;

#[derive(Args, Debug, Clone)]
pub struct PlannerArgs {
    /// Maximum number of resources per activity
    pub max_resources: usize,

    /// Maximum number of comments per activity
    pub max_comments: usize,

    /// Maximum number of activities in the catalog
    pub max_activities: usize,

    /// Number of days of the trip
    pub num_days: usize,

    /// Maximum number of activities planned on a single day
    pub max_activities_per_day: usize,

    /// Activities file loaded before the menu starts
    pub activities_file: Option<PathBuf>,
}

impl PlannerArgs {
    pub fn activity_limits(&self) -> ActivityLimits {
        ActivityLimits::new(self.max_resources, self.max_comments)
    }
}
