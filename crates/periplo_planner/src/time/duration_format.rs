use jiff::SignedDuration;

/// Renders a duration as `"{h}h {m}min"`, dropping whichever part is zero.
pub fn format_duration(duration: SignedDuration) -> String {
    let total = duration.as_mins();
    let hours = total / 60;
    let minutes = total % 60;

    if hours <= 0 {
        format!("{minutes}min")
    } else if minutes <= 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes}min")
    }
}
