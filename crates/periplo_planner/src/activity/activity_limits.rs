/// Per-activity bounds on the resource and comment lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLimits {
    pub max_resources: usize,
    pub max_comments: usize,
}

impl ActivityLimits {
    pub fn new(max_resources: usize, max_comments: usize) -> Self {
        ActivityLimits {
            max_resources,
            max_comments,
        }
    }
}
