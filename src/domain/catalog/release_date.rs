//! Parsing of spoken release-date slot values.
//!
//! The voice platform resolves dates into a handful of string shapes:
//! `2015-11-24`, `2015-11`, `2015`, `2015-W48`, `2015-W48-WE`, `2015-SU`,
//! plus decade (`201X`) and relative (`PRESENT_REF`) forms. Only shapes that
//! pin down a concrete year are accepted.

use chrono::{Datelike, NaiveDate};

/// A release date resolved to at least a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl ParsedDate {
    fn year_only(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }
}

/// Parses a date slot value. Returns `None` when no concrete year is present.
pub fn parse_date(raw: &str) -> Option<ParsedDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(ParsedDate {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
        });
    }

    let mut parts = raw.split('-');
    let year = parse_year(parts.next()?)?;

    let parsed = match parts.next() {
        None => return Some(ParsedDate::year_only(year)),
        Some("SP" | "SU" | "FA" | "WI") => ParsedDate::year_only(year),
        Some(week) if week.starts_with('W') => {
            let number: u32 = digits(&week[1..])?.parse().ok()?;
            if !(1..=53).contains(&number) {
                return None;
            }
            let suffix = parts.next();
            let trailing = parts.next();
            return match (suffix, trailing) {
                (None, _) | (Some("WE"), None) => Some(ParsedDate::year_only(year)),
                _ => None,
            };
        }
        Some(month) => {
            let month: u32 = digits(month).filter(|m| m.len() == 2)?.parse().ok()?;
            if !(1..=12).contains(&month) {
                return None;
            }
            ParsedDate {
                year,
                month: Some(month),
                day: None,
            }
        }
    };

    // Anything trailing a season or month here is a malformed or invalid date.
    parts.next().is_none().then_some(parsed)
}

fn parse_year(text: &str) -> Option<i32> {
    digits(text).filter(|y| y.len() == 4)?.parse().ok()
}

fn digits(text: &str) -> Option<&str> {
    (!text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_full_date() {
        assert_eq!(
            parse_date("2010-07-16"),
            Some(ParsedDate {
                year: 2010,
                month: Some(7),
                day: Some(16)
            })
        );
    }

    #[test]
    fn parses_year_and_month_forms() {
        assert_eq!(parse_date("2010"), Some(ParsedDate::year_only(2010)));
        assert_eq!(
            parse_date("2010-07"),
            Some(ParsedDate {
                year: 2010,
                month: Some(7),
                day: None
            })
        );
    }

    #[test]
    fn parses_week_and_season_forms_to_year() {
        assert_eq!(parse_date("2015-W48"), Some(ParsedDate::year_only(2015)));
        assert_eq!(parse_date("2015-W48-WE"), Some(ParsedDate::year_only(2015)));
        assert_eq!(parse_date("2017-SU"), Some(ParsedDate::year_only(2017)));
    }

    #[test]
    fn rejects_forms_without_a_concrete_year() {
        for raw in ["201X", "XXXX-11-24", "PRESENT_REF", "", "next week", "99"] {
            assert_eq!(parse_date(raw), None, "{raw} should not parse");
        }
    }

    #[test]
    fn rejects_invalid_calendar_values() {
        for raw in ["2015-13", "2015-02-30", "2015-W60", "2015-W48-XX", "2015-SU-01"] {
            assert_eq!(parse_date(raw), None, "{raw} should not parse");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_date(" 1999 "), Some(ParsedDate::year_only(1999)));
    }

    proptest! {
        #[test]
        fn never_panics(raw in "\\PC*") {
            let _ = parse_date(&raw);
        }

        #[test]
        fn four_digit_years_round_trip(year in 1000i32..=9999) {
            prop_assert_eq!(parse_date(&year.to_string()).map(|d| d.year), Some(year));
        }
    }
}
