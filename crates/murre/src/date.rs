use chrono::{DateTime, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseDateError {
    #[error("invalid date '{text}'")]
    InvalidDate {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid datetime '{text}'")]
    InvalidDateTime {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parses an ISO 8601 date or datetime into the calendar date it names.
///
/// Datetimes resolve to the date in the offset the text itself encodes.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseDateError> {
    if text.contains('T') {
        let date = DateTime::parse_from_rfc3339(text).map_err(|source| {
            ParseDateError::InvalidDateTime {
                text: text.to_string(),
                source,
            }
        })?;

        Ok(date.date_naive())
    } else {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|source| {
            ParseDateError::InvalidDate {
                text: text.to_string(),
                source,
            }
        })
    }
}

pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}
