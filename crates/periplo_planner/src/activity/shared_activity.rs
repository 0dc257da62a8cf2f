use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

use crate::activity::activity::Activity;

/// Aliased handle to an [`Activity`].
///
/// The catalog and the trip hold clones of the same handle, so an edit made
/// through one is visible through the other. Equality is identity: two handles
/// are equal only when they point at the same activity.
#[derive(Debug, Clone)]
pub struct SharedActivity(Rc<RefCell<Activity>>);

impl SharedActivity {
    pub fn new(activity: Activity) -> Self {
        SharedActivity(Rc::new(RefCell::new(activity)))
    }

    pub fn borrow(&self) -> Ref<'_, Activity> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Activity> {
        self.0.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &SharedActivity) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn name(&self) -> String {
        self.0.borrow().name().to_string()
    }
}

impl From<Activity> for SharedActivity {
    fn from(activity: Activity) -> Self {
        SharedActivity::new(activity)
    }
}

impl PartialEq for SharedActivity {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for SharedActivity {}

#[cfg(test)]
mod tests {
    use crate::activity::activity_limits::ActivityLimits;

    use super::*;

    #[test]
    fn test_equality_is_identity() {
        let limits = ActivityLimits::new(1, 1);
        let first = SharedActivity::new(Activity::new("Hike", limits).unwrap());
        let twin = SharedActivity::new(Activity::new("Hike", limits).unwrap());
        let alias = first.clone();

        assert_eq!(first, alias);
        assert_ne!(first, twin);
    }

    #[test]
    fn test_mutation_is_visible_through_aliases() {
        let shared = SharedActivity::new(Activity::new("Hike", ActivityLimits::new(1, 1)).unwrap());
        let alias = shared.clone();

        shared.borrow_mut().append_comment("Steep").unwrap();
        alias.borrow_mut().set_price(10.0).unwrap();

        assert_eq!(alias.borrow().comments(), &["Steep"]);
        assert_eq!(shared.borrow().price().value(), 10.0);
    }
}
