//! Timestamp rendering for the human-readable handlers
//!
//! Entries always carry UTC; conversion to local time happens only here, at
//! display time.

use chrono::{DateTime, Local, Utc};

/// Wall clock format used by the text and shell handlers: `15:04:05`
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Render a UTC instant as a local `HH:MM:SS` clock reading
#[must_use]
pub fn local_clock(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format(CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_clock_shape() {
        let time = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let clock = local_clock(&time);

        assert_eq!(clock.len(), 8);
        assert!(clock.ends_with(":45"));
        assert_eq!(&clock[2..3], ":");
    }

    #[test]
    fn test_matches_local_conversion() {
        let time = Utc::now();
        let expected = time.with_timezone(&Local).format("%H:%M:%S").to_string();
        assert_eq!(local_clock(&time), expected);
    }
}
