//! Issue date handling.
//!
//! Extraction keeps the date exactly as written; this module only interprets
//! it when a record is validated.

use chrono::NaiveDate;

use super::patterns::DATE_DMY;

/// Parse a `D/M/Y` or `D-M-Y` date as printed on Peruvian receipts.
pub fn parse_issue_date(s: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY.captures(s.trim())?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = parse_year(&caps[3])?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() == 2 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 {
            Some(2000 + year)
        } else {
            Some(1900 + year)
        }
    } else {
        Some(year)
    }
}
