//! Renders track lengths the way player interfaces display them.

/// Formats a second count as "m:ss", or as "h:mm:ss" from one hour up.
///
/// The leading component is never zero-padded, the rest are padded to
/// two digits: `format_secs(65)` is "1:05", `format_secs(3661)` is
/// "1:01:01" and `format_secs(0)` is "0:00".
pub fn format_secs(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = secs / 60 % 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_below_an_hour_use_two_fields() {
        assert_eq!(format_secs(0), "0:00");
        assert_eq!(format_secs(5), "0:05");
        assert_eq!(format_secs(59), "0:59");
        assert_eq!(format_secs(65), "1:05");
        assert_eq!(format_secs(600), "10:00");
        assert_eq!(format_secs(3599), "59:59");
    }

    #[test]
    fn durations_from_an_hour_up_include_hours() {
        assert_eq!(format_secs(3600), "1:00:00");
        assert_eq!(format_secs(3661), "1:01:01");
        assert_eq!(format_secs(7199), "1:59:59");
        assert_eq!(format_secs(36000), "10:00:00");
    }

    #[test]
    // Reassembling h/m/s from the total must reproduce the same fields
    fn field_values_round_trip() {
        for &(h, m, s) in &[(0, 0, 9), (0, 10, 0), (1, 0, 59), (12, 34, 56), (99, 59, 9)] {
            let total = h * 3600 + m * 60 + s;
            let expected = match h {
                0 => format!("{}:{:02}", m, s),
                _ => format!("{}:{:02}:{:02}", h, m, s),
            };
            assert_eq!(format_secs(total), expected);
        }
    }
}
