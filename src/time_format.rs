const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Converts a number of elapsed seconds into a pluralized, space-separated duration.
///
/// Output starts at the highest non-zero unit among days, hours, minutes and seconds,
/// and every lower unit follows even when zero (e.g. `"1 day 1 hour 0 minute 0 second "`).
/// Whole weeks are dropped before formatting, so 10 days renders as `"3 days ..."`.
/// Every term, including the last, ends with a single space.
pub fn seconds_to_human(input: u64) -> String {
    let remainder = input % WEEK;
    let days = remainder / DAY;
    let hours = (remainder % DAY) / HOUR;
    let minutes = (remainder % HOUR) / MINUTE;
    let seconds = remainder % MINUTE;

    let units = [(days, "day"), (hours, "hour"), (minutes, "minute")];
    let first = units
        .iter()
        .position(|(count, _)| *count > 0)
        .unwrap_or(units.len());

    let mut result: String = units[first..]
        .iter()
        .map(|(count, name)| plural(*count, name))
        .collect();
    result.push_str(&plural(seconds, "second"));
    result
}

/// Renders `"<count> <name> "`, appending `s` to the name when count is 2 or more.
fn plural(count: u64, singular: &str) -> String {
    if count <= 1 {
        format!("{} {} ", count, singular)
    } else {
        format!("{} {}s ", count, singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_singular_second() {
        assert_eq!(seconds_to_human(0), "0 second ");
    }

    #[test]
    fn under_a_minute_only_prints_seconds() {
        assert_eq!(seconds_to_human(1), "1 second ");
        assert_eq!(seconds_to_human(2), "2 seconds ");
        for s in 0..60 {
            let text = seconds_to_human(s);
            assert!(text.ends_with("second ") || text.ends_with("seconds "));
            assert!(!text.contains("minute"));
            assert!(!text.contains("hour"));
            assert!(!text.contains("day"));
        }
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(seconds_to_human(61), "1 minute 1 second ");
        assert_eq!(seconds_to_human(120), "2 minutes 0 second ");
        assert_eq!(seconds_to_human(3661), "1 hour 1 minute 1 second ");
        assert_eq!(seconds_to_human(3600), "1 hour 0 minute 0 second ");
    }

    #[test]
    fn lower_units_are_kept_once_a_higher_unit_is_set() {
        assert_eq!(seconds_to_human(90000), "1 day 1 hour 0 minute 0 second ");
    }

    #[test]
    fn typical_day_length() {
        // 15h 10m 37s, a summer day in Belgrade
        assert_eq!(seconds_to_human(54637), "15 hours 10 minutes 37 seconds ");
    }

    #[test]
    fn whole_weeks_are_discarded() {
        assert_eq!(seconds_to_human(691200), "1 day 0 hour 0 minute 0 second ");
        assert_eq!(seconds_to_human(864000), "3 days 0 hour 0 minute 0 second ");
        assert_eq!(seconds_to_human(WEEK), "0 second ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "hour"), "0 hour ");
        assert_eq!(plural(1, "hour"), "1 hour ");
        assert_eq!(plural(5, "hour"), "5 hours ");
    }
}
