use chrono::{Local, NaiveDate};

/// Value of the "all" option in filter selects
pub const ALL_OPTION: &str = "all";

/// Parse a filter select value, mapping the "all" option (or anything unknown) to `None`
pub fn parse_filter<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    if value == ALL_OPTION {
        None
    } else {
        parse(value)
    }
}

/// Local calendar date, used as the lower bound of the booking date input
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Timestamp label in the format the sample data uses
pub fn now_label() -> String {
    Local::now().format("%d/%m/%Y %H:%M").to_string()
}

/// Milliseconds since the epoch, for pointer throttling
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapstation_common::BatteryStatus;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("all", BatteryStatus::from_slug), None);
        assert_eq!(parse_filter("full", BatteryStatus::from_slug), Some(BatteryStatus::Full));
        assert_eq!(parse_filter("bogus", BatteryStatus::from_slug), None);
    }

    #[test]
    fn test_distance_filter() {
        let parse = |v: &str| v.parse::<f64>().ok();
        assert_eq!(parse_filter("5", parse), Some(5.0));
        assert_eq!(parse_filter(ALL_OPTION, parse), None);
    }
}
