//! Display formatting for amounts, dates and durations

use chrono::NaiveDate;

/// Group digits by thousands: `150000` becomes `"150,000"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_vnd(amount: u64) -> String {
    format!("{} VNĐ", group_thousands(amount))
}

/// Short form used on KPI cards: `2_850_000` becomes `"2.85M"`
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000_000 {
        format!("{:.2}B", value as f64 / 1_000_000_000.0)
    } else if value >= 1_000_000 {
        format!("{:.2}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_duration(secs: u32) -> String {
    format!("{}m {:02}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(150_000), "150,000");
        assert_eq!(group_thousands(2_850_000), "2,850,000");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(150_000), "150,000 VNĐ");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(2_850_000), "2.85M");
        assert_eq!(format_compact(1_248), "1.2K");
        assert_eq!(format_compact(42), "42");
    }

    #[test]
    fn test_format_date_and_duration() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        assert_eq!(format_date(date), "05/12/2024");
        assert_eq!(format_duration(225), "3m 45s");
        assert_eq!(format_duration(56), "0m 56s");
    }
}
