use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::database::models::{BereavementRelation, Gender, LicenseSubtype};
use crate::services::policy;

/// Wire format for every date in the system, manual entry and date picker
/// alike.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Strict DD-MM-YYYY parse. Returns `None` for blank or malformed input, and
/// rejects rollover dates like 31-02-2024 outright.
///
/// This is the single place the lenient-date contract hangs off: callers that
/// get `None` during validation treat the form as passing, and callers that
/// get `None` during derivation treat the end date as not yet computable.
pub fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whole days from start to end, negative when end precedes start.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Derive the entitlement end date from the policy table: start date plus the
/// subtype's entitlement days, calendar arithmetic, no weekend skipping.
///
/// `None` means undetermined, not an error: blank or unparseable start date,
/// no subtype chosen yet, a subtype whose tier key is still missing, or exam
/// leave (which never derives). The caller keeps the manually entered end
/// date in all of those cases.
pub fn derive_end_date(
    start_date: &str,
    subtype: Option<&LicenseSubtype>,
    relation: Option<&BereavementRelation>,
    gender: Option<&Gender>,
) -> Option<String> {
    let start = try_parse_date(start_date)?;
    let days = policy::entitlement_days(subtype?, relation, gender)?;
    let end = start.checked_add_days(Days::new(days as u64))?;
    Some(format_date(end))
}
