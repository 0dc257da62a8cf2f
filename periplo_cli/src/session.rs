use periplo_planner::{
    activity::activity_limits::ActivityLimits, catalog::activity_catalog::ActivityCatalog,
    trip::trip::Trip,
};

use crate::config::PlannerArgs;

/// Everything one planning run works on.
pub struct Session {
    pub catalog: ActivityCatalog,
    pub trip: Trip,
    pub limits: ActivityLimits,
}

impl Session {
    pub fn new(args: &PlannerArgs) -> Self {
        Session {
            catalog: ActivityCatalog::new(args.max_activities),
            trip: Trip::new(args.num_days, args.max_activities_per_day),
            limits: args.activity_limits(),
        }
    }
}
