//! Input format predicates used by presentation layers before calling core.
//!
//! # Invariants
//! - Predicates are pure; date checks take `today` explicitly.
//! - Patterns compile once per process.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_FORMAT: &str = "%d/%m/%Y";
const MIN_SALARY: f64 = 0.0;
const MAX_SALARY: f64 = 10_000_000.0;
const MIN_POSTAL_CODE: u32 = 110_000;
const MAX_POSTAL_CODE: u32 = 999_999;
const MIN_WORKING_AGE: u32 = 18;
const MAX_WORKING_AGE: u32 = 60;
const MAX_INITIATIVE_AGE_YEARS: u32 = 50;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z]+([ ]?[a-zA-Z]?[a-zA-Z]*)?([ ]?[a-zA-Z]?[a-zA-Z]*)?$")
        .expect("valid name regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|\+91)?[6-9][0-9]{9}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z][a-zA-Z0-9]{2,38}([_\-.]{0,5}[a-zA-Z0-9]{1,20})?@[a-zA-Z][a-zA-Z0-9\-]{3,254}\.[a-z]{3,6}(\.[a-z]{2,5})?$",
    )
    .expect("valid email regex")
});
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(3[01]|[12][0-9]|0[1-9])/(1[0-2]|0[1-9])/[0-9]{4}$").expect("valid date regex")
});
static DOOR_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9A-Za-z/]{0,5}$").expect("valid door number regex"));
static ID_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[1-9][0-9]*\s*(,\s*[1-9][0-9]*\s*)*$").expect("valid id list regex")
});

/// Letters only, up to three space-separated words; the first has 2+ letters.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Indian mobile number with optional `0` or `+91` prefix.
pub fn is_valid_phone(phone_number: &str) -> bool {
    PHONE_RE.is_match(phone_number)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `dd/mm/yyyy` naming a real calendar day (`31/02/2020` is rejected).
pub fn is_valid_date(date: &str) -> bool {
    parse_date(date).is_some()
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Renders a date in the same `dd/mm/yyyy` form `parse_date` accepts.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn is_valid_salary(salary: f64) -> bool {
    salary > MIN_SALARY && salary < MAX_SALARY
}

pub fn is_valid_postal_code(postal_code: u32) -> bool {
    postal_code > MIN_POSTAL_CODE && postal_code < MAX_POSTAL_CODE
}

pub fn is_valid_door_number(door_number: &str) -> bool {
    DOOR_NUMBER_RE.is_match(door_number)
}

/// Comma-separated positive integers; whitespace around items is allowed.
pub fn is_valid_id_list(ids: &str) -> bool {
    ID_LIST_RE.is_match(ids)
}

/// Age in whole years on `today` is within `[18, 60)`.
pub fn is_valid_age(date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    today
        .years_since(date_of_birth)
        .is_some_and(|age| (MIN_WORKING_AGE..MAX_WORKING_AGE).contains(&age))
}

/// Not after `today` and fewer than 50 whole years before it.
pub fn is_valid_start_date(start_date: NaiveDate, today: NaiveDate) -> bool {
    today
        .years_since(start_date)
        .is_some_and(|years| years < MAX_INITIATIVE_AGE_YEARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn names_allow_up_to_three_words() {
        assert!(is_valid_name("Asha"));
        assert!(is_valid_name("Asha Rani Rao"));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("Asha Rani Rao Iyer"));
        assert!(!is_valid_name("Asha3"));
    }

    #[test]
    fn phones_accept_optional_prefix() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("09876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("987654321"));
    }

    #[test]
    fn emails_follow_registry_shape() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("asha.rao@mailhost.com.in"));
        assert!(!is_valid_email("Asha@example.com"));
        assert!(!is_valid_email("as@example.com"));
        assert!(!is_valid_email("asha@ex.com"));
        assert!(!is_valid_email("asha@example.c"));
    }

    #[test]
    fn dates_must_exist_on_the_calendar() {
        assert_eq!(parse_date("29/02/2024"), Some(day(2024, 2, 29)));
        assert!(!is_valid_date("29/02/2023"));
        assert!(!is_valid_date("31/04/2020"));
        assert!(!is_valid_date("2020-04-01"));
        assert_eq!(format_date(day(2021, 1, 4)), "04/01/2021");
    }

    #[test]
    fn numeric_ranges_are_exclusive() {
        assert!(is_valid_salary(1.0));
        assert!(!is_valid_salary(0.0));
        assert!(!is_valid_salary(10_000_000.0));
        assert!(!is_valid_salary(f64::NAN));
        assert!(is_valid_postal_code(560_001));
        assert!(!is_valid_postal_code(110_000));
        assert!(!is_valid_postal_code(999_999));
    }

    #[test]
    fn door_numbers_start_with_a_non_zero_digit() {
        assert!(is_valid_door_number("12A/3"));
        assert!(!is_valid_door_number("0A"));
        assert!(!is_valid_door_number("1234567"));
    }

    #[test]
    fn id_lists_accept_positive_integers_including_zero_digits() {
        assert!(is_valid_id_list("1, 2, 9"));
        assert!(is_valid_id_list("10,20"));
        assert!(!is_valid_id_list("0"));
        assert!(!is_valid_id_list("1,,2"));
        assert!(!is_valid_id_list(""));
        assert!(!is_valid_id_list("1,a"));
    }

    #[test]
    fn age_window_is_eighteen_inclusive_to_sixty_exclusive() {
        let today = day(2026, 6, 15);
        assert!(is_valid_age(day(2008, 6, 15), today));
        assert!(!is_valid_age(day(2008, 6, 16), today));
        assert!(is_valid_age(day(1966, 6, 16), today));
        assert!(!is_valid_age(day(1966, 6, 15), today));
        assert!(!is_valid_age(day(2030, 1, 1), today));
    }

    #[test]
    fn start_dates_cannot_be_future_or_too_old() {
        let today = day(2026, 6, 15);
        assert!(is_valid_start_date(today, today));
        assert!(is_valid_start_date(day(1976, 6, 16), today));
        assert!(!is_valid_start_date(day(1976, 6, 15), today));
        assert!(!is_valid_start_date(day(2026, 6, 16), today));
    }
}
