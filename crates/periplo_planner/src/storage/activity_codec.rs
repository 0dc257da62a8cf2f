//! Line based text format of the activities file.
//!
//! ```text
//! <name>
//! <description>
//! <price>
//! <duration in minutes>
//! <resource>...
//! COMENTARIOS
//! <comment>...
//! -----
//! ```
//!
//! Resource and comment lines are stored verbatim, so a line equal to one of
//! the two markers cannot round-trip. `Activity` turns line breaks inside its
//! fields into spaces before they get here.

use std::io::{self, BufRead};

use tracing::warn;

use crate::activity::{activity::Activity, activity_limits::ActivityLimits, price::Price};

pub const COMMENTS_HEADER: &str = "COMENTARIOS";
pub const BLOCK_END: &str = "-----";

pub fn encode_activity(activity: &Activity) -> String {
    let mut lines = vec![
        activity.name().to_string(),
        activity.description().to_string(),
        activity.price().to_raw_string(),
        activity.duration_minutes().to_string(),
    ];

    lines.extend(activity.resources().iter().cloned());
    lines.push(COMMENTS_HEADER.to_string());
    lines.extend(activity.comments().iter().cloned());
    lines.push(BLOCK_END.to_string());

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

#[derive(Clone, Copy)]
enum Section {
    Resources,
    Comments,
}

/// Reads activity blocks one at a time from a buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a file written
/// in another encoding still loads.
pub struct ActivityDecoder<R> {
    reader: R,
    buffer: Vec<u8>,
    limits: ActivityLimits,
}

impl<R: BufRead> ActivityDecoder<R> {
    pub fn new(reader: R, limits: ActivityLimits) -> Self {
        ActivityDecoder {
            reader,
            buffer: Vec::new(),
            limits,
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }

        let line = self.buffer.strip_suffix(b"\n").unwrap_or(self.buffer.as_slice());
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    /// Returns `Ok(None)` once the input holds no further block.
    pub fn next_activity(&mut self) -> io::Result<Option<Activity>> {
        let name = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };

        let description = self.next_line()?.unwrap_or_default();
        let price = match self.next_line()? {
            Some(line) => parse_price(&name, &line),
            None => Price::ZERO,
        };
        let duration_minutes = match self.next_line()? {
            Some(line) => parse_duration_minutes(&name, &line),
            None => 0,
        };

        let mut activity = Activity::new(name, self.limits)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        activity.set_description(description);
        activity.restore_numbers(price, duration_minutes);

        let mut section = Section::Resources;
        while let Some(line) = self.next_line()? {
            let trimmed = line.trim();
            if trimmed == BLOCK_END {
                break;
            }
            if trimmed == COMMENTS_HEADER {
                section = Section::Comments;
                continue;
            }
            if trimmed.is_empty() {
                continue;
            }

            let appended = match section {
                Section::Resources => activity.append_resource(line),
                Section::Comments => activity.append_comment(line),
            };
            if let Err(error) = appended {
                warn!(activity = activity.name(), "Dropping line: {}", error);
            }
        }

        Ok(Some(activity))
    }
}

impl<R: BufRead> Iterator for ActivityDecoder<R> {
    type Item = io::Result<Activity>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_activity().transpose()
    }
}

fn parse_price(name: &str, line: &str) -> Price {
    match line.trim().parse::<f64>().ok().and_then(Price::new) {
        Some(price) => price,
        None => {
            warn!(activity = name, "Invalid price '{}', using 0", line);
            Price::ZERO
        }
    }
}

fn parse_duration_minutes(name: &str, line: &str) -> i32 {
    match line.trim().parse::<i32>() {
        Ok(minutes) if minutes >= 0 => minutes,
        _ => {
            warn!(activity = name, "Invalid duration '{}', using 0", line);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_activity;

    use super::*;

    fn decode_all(text: &str, limits: ActivityLimits) -> Vec<Activity> {
        ActivityDecoder::new(text.as_bytes(), limits)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_encode() {
        let activity = create_activity("Museo del Prado", 120, 15.0, &["Ticket"], &["Closed on Mondays"]);

        assert_eq!(
            encode_activity(&activity),
            "Museo del Prado\nMuseo del Prado tour\n15.0\n120\nTicket\nCOMENTARIOS\nClosed on Mondays\n-----\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let activity = create_activity("Kayak", 95, 32.75, &["Paddle", "Life vest"], &["Fun", "Wet"]);
        let decoded = decode_all(&encode_activity(&activity), activity.limits());

        assert_eq!(decoded.len(), 1);
        let decoded = &decoded[0];
        assert_eq!(decoded.name(), activity.name());
        assert_eq!(decoded.description(), activity.description());
        assert_eq!(decoded.price(), activity.price());
        assert_eq!(decoded.duration(), activity.duration());
        assert_eq!(decoded.resources(), activity.resources());
        assert_eq!(decoded.comments(), activity.comments());
    }

    #[test]
    fn test_round_trip_after_line_breaks() {
        let mut activity = create_activity("Walk", 30, 2.0, &[], &[]);
        activity.set_description("Old\ntown");
        let decoded = decode_all(&encode_activity(&activity), activity.limits());

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].description(), "Old town");
        assert_eq!(decoded[0].duration_minutes(), 30);
        assert_eq!(decoded[0].price(), activity.price());
    }

    #[test]
    fn test_skips_leading_blank_lines_and_ends_at_eof() {
        let text = "\n\n   \nWalk\nCity walk\n0.0\n45\nCOMENTARIOS\n-----\n\n\n";
        let activities = decode_all(text, ActivityLimits::new(2, 2));

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name(), "Walk");
        assert_eq!(activities[0].duration_minutes(), 45);
    }

    #[test]
    fn test_empty_input() {
        assert!(decode_all("", ActivityLimits::new(1, 1)).is_empty());
        assert!(decode_all("\n\n", ActivityLimits::new(1, 1)).is_empty());
    }

    #[test]
    fn test_bad_numbers_default_to_zero() {
        let text = "Walk\nCity walk\ntwelve\nhalf an hour\nMap\nCOMENTARIOS\n-----\n";
        let activities = decode_all(text, ActivityLimits::new(2, 2));

        assert_eq!(activities[0].price(), Price::ZERO);
        assert_eq!(activities[0].duration_minutes(), 0);
        assert_eq!(activities[0].resources(), &["Map"]);
    }

    #[test]
    fn test_overflow_lines_are_dropped() {
        let text = "Walk\n\n5.0\n30\nA\nB\nC\nCOMENTARIOS\nx\n\ny\nz\n-----\n";
        let activities = decode_all(text, ActivityLimits::new(2, 1));

        assert_eq!(activities[0].resources(), &["A", "B"]);
        assert_eq!(activities[0].comments(), &["x"]);
    }

    #[test]
    fn test_several_blocks() {
        let text = "A\nda\n1.5\n10\n-----\n\nB\ndb\n2.5\n20\nCOMENTARIOS\nnice\n-----\n";
        let activities = decode_all(text, ActivityLimits::new(1, 1));

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].name(), "A");
        assert!(activities[0].comments().is_empty());
        assert_eq!(activities[1].name(), "B");
        assert_eq!(activities[1].comments(), &["nice"]);
        assert_eq!(activities[1].price().value(), 2.5);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = b"A\n\n1.0\n10\n-----\nExcursi\xf3n\r\nLatin-1\r\n2.0\r\n20\r\n-----\r\nB\n\n3.0\n30\n-----\n";
        let activities = ActivityDecoder::new(&bytes[..], ActivityLimits::new(1, 1))
            .collect::<io::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(activities.len(), 3);
        assert_eq!(activities[1].name(), "Excursi\u{FFFD}n");
        assert_eq!(activities[1].description(), "Latin-1");
        assert_eq!(activities[1].duration_minutes(), 20);
        assert_eq!(activities[2].name(), "B");
    }

    #[test]
    fn test_truncated_block() {
        let activities = decode_all("Lonely\n", ActivityLimits::new(1, 1));

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].description(), "");
        assert_eq!(activities[0].price(), Price::ZERO);
    }
}
