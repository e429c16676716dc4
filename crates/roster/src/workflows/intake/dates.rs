//! Calendar helpers shared by the validation rules and the adapters.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Parse a `YYYY-MM-DD` form value.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Whole years between `birth_date` and `target`.
///
/// The calendar-year difference, less one when the target falls before the
/// birthday anniversary in its year. A 29 February birthday is reached on
/// 1 March in common years.
pub fn age_on(birth_date: NaiveDate, target: NaiveDate) -> i32 {
    let mut age = target.year() - birth_date.year();
    if (target.month(), target.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
