//! Vietnamese date and time conventions.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// `ngày 05 tháng 03 năm 2024`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "ngày {:02} tháng {:02} năm {}",
        date.day(),
        date.month(),
        date.year()
    )
}

/// `05/03/2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `05/03/2024 14:30`
pub fn short_datetime(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// `14:30`
pub fn clock(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

/// `08:00 - 11:30`, or just the start when there is no end.
pub fn time_range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> String {
    match end {
        Some(end) => format!("{} - {}", clock(start), clock(end)),
        None => clock(start),
    }
}

/// Day of the week, e.g. `Thứ Hai`.
pub fn weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Thứ Hai",
        Weekday::Tue => "Thứ Ba",
        Weekday::Wed => "Thứ Tư",
        Weekday::Thu => "Thứ Năm",
        Weekday::Fri => "Thứ Sáu",
        Weekday::Sat => "Thứ Bảy",
        Weekday::Sun => "Chủ Nhật",
    }
}

/// Roman numeral for section numbering. Only small counts occur.
pub fn roman(n: usize) -> String {
    const TABLE: [(usize, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut n = n;
    let mut out = String::new();
    for (value, numeral) in TABLE {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

/// Upper-case a string, Vietnamese letters included.
pub fn upper(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Upper-case the first letter only, for phrases opening a sentence.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(long_date(date), "ngày 05 tháng 03 năm 2024");
        assert_eq!(short_date(date), "05/03/2024");
        assert_eq!(weekday(date), "Thứ Ba");
        assert_eq!(
            weekday(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
            "Chủ Nhật"
        );
    }

    #[test]
    fn test_times() {
        let start = at(2024, 3, 5, 8, 0);
        assert_eq!(time_range(start, None), "08:00");
        assert_eq!(
            time_range(start, Some(at(2024, 3, 5, 11, 30))),
            "08:00 - 11:30"
        );
        assert_eq!(short_datetime(start), "05/03/2024 08:00");
    }

    #[test]
    fn test_roman() {
        assert_eq!(roman(1), "I");
        assert_eq!(roman(4), "IV");
        assert_eq!(roman(7), "VII");
        assert_eq!(roman(9), "IX");
        assert_eq!(roman(14), "XIV");
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(upper(" chủ tịch "), "CHỦ TỊCH");
        assert_eq!(upper("ủy ban nhân dân"), "ỦY BAN NHÂN DÂN");
        assert_eq!(upper_first("ngày 05 tháng 03"), "Ngày 05 tháng 03");
        assert_eq!(upper_first("đã"), "Đã");
        assert_eq!(upper_first(""), "");
    }
}
