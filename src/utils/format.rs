use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder written to the store for reminders without a due date
pub const NO_DUE_DATE: &str = "N/A";

/// Serialize an optional due date, writing `N/A` when absent
pub fn serialize_due<S>(due: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match due {
        Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_str(NO_DUE_DATE),
    }
}

/// Deserialize `N/A`, an empty string or null as no due date
pub fn deserialize_due<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_due_date(&s).map_err(Error::custom),
    }
}

/// Parse a due date given on the command line or read from the store.
///
/// Returns `Ok(None)` for the "no due date" spellings (`N/A`, `none`, empty).
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case(NO_DUE_DATE)
        || trimmed.eq_ignore_ascii_case("none")
    {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", trimmed))
}

pub fn format_due(due: &Option<NaiveDate>) -> String {
    match due {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => NO_DUE_DATE.to_string(),
    }
}
