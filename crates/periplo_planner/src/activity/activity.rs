use std::fmt::Display;

use jiff::SignedDuration;

use crate::{
    activity::{activity_error::ActivityError, activity_limits::ActivityLimits, price::Price},
    storage::activity_codec,
    time::duration_format::format_duration,
    utils::bounded_list::BoundedList,
};

#[derive(Debug, Clone)]
pub struct Activity {
    name: String,
    description: String,
    price: Price,
    duration: SignedDuration,

    /// Bounded by `ActivityLimits::max_resources`, fixed at creation
    resources: BoundedList<String>,

    /// Bounded by `ActivityLimits::max_comments`, fixed at creation
    comments: BoundedList<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>, limits: ActivityLimits) -> Result<Self, ActivityError> {
        let name = single_line(name.into());
        if name.trim().is_empty() {
            return Err(ActivityError::BlankName);
        }

        Ok(Activity {
            name,
            description: String::new(),
            price: Price::ZERO,
            duration: SignedDuration::ZERO,
            resources: BoundedList::new(limits.max_resources),
            comments: BoundedList::new(limits.max_comments),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = single_line(description.into());
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), ActivityError> {
        self.price = Price::new(price).ok_or(ActivityError::InvalidPrice)?;
        Ok(())
    }

    pub fn duration(&self) -> SignedDuration {
        self.duration
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration.as_mins()
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) -> Result<(), ActivityError> {
        if minutes == 0 {
            return Err(ActivityError::InvalidDuration);
        }

        self.duration = SignedDuration::from_mins(i64::from(minutes));
        Ok(())
    }

    // The loader keeps whatever it read, including the zero fallback
    pub(crate) fn restore_numbers(&mut self, price: Price, duration_minutes: i32) {
        self.price = price;
        self.duration = SignedDuration::from_mins(i64::from(duration_minutes.max(0)));
    }

    pub fn limits(&self) -> ActivityLimits {
        ActivityLimits::new(self.resources.capacity(), self.comments.capacity())
    }

    pub fn max_resources(&self) -> usize {
        self.resources.capacity()
    }

    pub fn max_comments(&self) -> usize {
        self.comments.capacity()
    }

    pub fn resources(&self) -> &[String] {
        self.resources.as_slice()
    }

    pub fn comments(&self) -> &[String] {
        self.comments.as_slice()
    }

    pub fn is_resources_full(&self) -> bool {
        self.resources.is_full()
    }

    pub fn is_comments_full(&self) -> bool {
        self.comments.is_full()
    }

    pub fn append_resource(&mut self, resource: impl Into<String>) -> Result<(), ActivityError> {
        let resource = single_line(resource.into());
        if resource.trim().is_empty() {
            return Err(ActivityError::InvalidValue);
        }

        let capacity = self.resources.capacity();
        self.resources
            .push(resource)
            .map_err(|_| ActivityError::ResourcesFull { capacity })
    }

    pub fn append_comment(&mut self, comment: impl Into<String>) -> Result<(), ActivityError> {
        let comment = single_line(comment.into());
        if comment.trim().is_empty() {
            return Err(ActivityError::InvalidValue);
        }

        let capacity = self.comments.capacity();
        self.comments
            .push(comment)
            .map_err(|_| ActivityError::CommentsFull { capacity })
    }

    /// Multi-line report meant for people.
    pub fn render_human(&self) -> String {
        self.to_string()
    }

    /// Block written to the activities file, see `storage::activity_codec`.
    pub fn render_compact(&self) -> String {
        activity_codec::encode_activity(self)
    }
}

/// Every text field takes exactly one line of the activities file.
fn single_line(text: String) -> String {
    if text.contains(['\n', '\r']) {
        text.replace(['\n', '\r'], " ")
    } else {
        text
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Activity: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Duration: {}", format_duration(self.duration))?;

        writeln!(f, "Resources:")?;
        for resource in &self.resources {
            writeln!(f, "- {resource}")?;
        }

        writeln!(f, "Comments:")?;
        for (index, comment) in self.comments.iter().enumerate() {
            writeln!(f, "{}. {comment}", index + 1)?;
        }

        Ok(())
    }
}
