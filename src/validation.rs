use lazy_static::lazy_static;
use regex::Regex;
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};
use validator::{ValidationError, ValidationErrors};

lazy_static! {
    /// Mobile numbers: optional leading `+`, then 10-15 digits, no leading zero.
    /// - Valid: "9876543210", "+919876543210", "14155552671"
    /// - Invalid: "12345", "0987654321", "98765-43210", "+91 98765 43210"
    pub static ref MOBILE_REGEX: Regex = Regex::new(r"^\+?[1-9][0-9]{9,14}$").unwrap();

    /// Gender is one of two literals, any letter case.
    pub static ref GENDER_REGEX: Regex = Regex::new(r"^(?i)(male|female)$").unwrap();
}

/// Parses the date shapes clients send for a birth date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and RFC 3339 timestamps; for a timestamp
/// the date in its own offset is kept.
pub fn normalize_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }
    if let Ok(date) = Date::parse(raw, format_description!("[year]/[month]/[day]")) {
        return Some(date);
    }
    OffsetDateTime::parse(raw, &Rfc3339).ok().map(|dt| dt.date())
}

pub fn validate_dob(raw: &str) -> Result<(), ValidationError> {
    match normalize_date(raw) {
        Some(_) => Ok(()),
        None => {
            let mut err = ValidationError::new("date");
            err.message = Some("dob must be a valid date (YYYY-MM-DD)".into());
            Err(err)
        }
    }
}

/// Flattens field errors into sorted, human readable messages.
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages
}
