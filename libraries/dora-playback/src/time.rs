//! Progress and time-label helpers
//!
//! The player tracks position as a percentage of the track, so labels are
//! derived from `(progress_percent, duration_secs)` pairs.

/// Clamp a progress/volume percentage into `[0, 100]`
///
/// NaN maps to 0.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Elapsed whole seconds at `progress_percent` of a `duration_secs` track
pub fn elapsed_secs(progress_percent: f64, duration_secs: u32) -> u64 {
    let elapsed = (progress_percent * f64::from(duration_secs) / 100.0).floor();
    // float-to-int casts saturate: negatives and NaN become 0
    elapsed as u64
}

/// Format the elapsed time at `progress_percent` as `M:SS`
///
/// Minutes are unpadded, seconds are zero-padded to two digits.
/// `progress_percent` is expected to be clamped by the caller.
///
/// ```
/// use dora_playback::format_time;
///
/// assert_eq!(format_time(0.0, 180), "0:00");
/// assert_eq!(format_time(100.0, 180), "3:00");
/// assert_eq!(format_time(50.0, 200), "1:40");
/// ```
pub fn format_time(progress_percent: f64, duration_secs: u32) -> String {
    format_secs(elapsed_secs(progress_percent, duration_secs))
}

/// Format a full track length as `M:SS`
pub fn format_duration(duration_secs: u32) -> String {
    format_secs(u64::from(duration_secs))
}

fn format_secs(total: u64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parse an `M:SS` label (as shown in song lists) into seconds
///
/// Returns `None` unless the seconds part is exactly two digits below 60.
pub fn parse_duration(label: &str) -> Option<u32> {
    let (minutes, seconds) = label.trim().split_once(':')?;
    if seconds.len() != 2 {
        return None;
    }

    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }

    minutes.checked_mul(60)?.checked_add(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_progress_is_zero() {
        assert_eq!(format_time(0.0, 0), "0:00");
        assert_eq!(format_time(0.0, 245), "0:00");
    }

    #[test]
    fn zero_duration_is_zero() {
        assert_eq!(format_time(75.0, 0), "0:00");
    }

    #[test]
    fn full_progress_is_total_length() {
        assert_eq!(format_time(100.0, 180), "3:00");
        assert_eq!(format_time(100.0, 245), format_duration(245));
        assert_eq!(format_duration(245), "4:05");
    }

    #[test]
    fn elapsed_is_floored() {
        // 33% of 190s = 62.7s
        assert_eq!(format_time(33.0, 190), "1:02");
        // 25% of 245s = 61.25s
        assert_eq!(format_time(25.0, 245), "1:01");
    }

    #[test]
    fn seconds_are_padded() {
        assert_eq!(format_time(50.0, 18), "0:09");
        assert_eq!(format_duration(605), "10:05");
    }

    #[test]
    fn negative_progress_formats_as_zero() {
        assert_eq!(format_time(-20.0, 200), "0:00");
        assert_eq!(format_time(f64::NAN, 200), "0:00");
    }

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(-10.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }

    #[test]
    fn parse_song_list_labels() {
        assert_eq!(parse_duration("3:21"), Some(201));
        assert_eq!(parse_duration("4:05"), Some(245));
        assert_eq!(parse_duration("0:00"), Some(0));
        assert_eq!(parse_duration(" 12:30 "), Some(750));
    }

    #[test]
    fn parse_rejects_malformed_labels() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("321"), None);
        assert_eq!(parse_duration("3:5"), None);
        assert_eq!(parse_duration("3:60"), None);
        assert_eq!(parse_duration("a:05"), None);
        assert_eq!(parse_duration("-1:05"), None);
    }

    #[test]
    fn parse_then_format_matches_label() {
        for label in ["2:50", "3:15", "5:15", "2:55", "3:30"] {
            let secs = parse_duration(label).unwrap();
            assert_eq!(format_duration(secs), label);
        }
    }
}
