// SPDX-License-Identifier: MPL-2.0
//! Clock-style formatting for playback time displays.

/// Formats seconds as `mm:ss`, or `h:mm:ss` once an hour is reached.
///
/// Non-finite or negative inputs render as `00:00` so a player whose
/// duration is still unknown shows a stable placeholder.
#[must_use]
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "00:00".to_string();
    }
    let total = secs.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_as_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn sub_minute_pads_both_fields() {
        assert_eq!(format_time(7.9), "00:07");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_time(125.0), "02:05");
    }

    #[test]
    fn hours_use_three_fields() {
        assert_eq!(format_time(3661.0), "1:01:01");
    }

    #[test]
    fn nan_and_negative_render_placeholder() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-3.0), "00:00");
    }
}
