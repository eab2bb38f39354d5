use crate::date::{format_date, parse_date, ParseDateError};
use crate::html::{time, HtmlElement};

const DISPLAY_FORMAT: &str = "%-d %B, %Y";

pub struct DateProps {
    pub date_string: String,
}

/// Renders a `<time>` element for the given ISO 8601 date string.
///
/// The `datetime` attribute carries the input verbatim, so callers keep
/// whatever time and offset precision they supplied; the displayed text is
/// just the calendar date, like "15 September, 2020".
pub fn date(DateProps { date_string }: DateProps) -> Result<HtmlElement, ParseDateError> {
    let date = parse_date(&date_string)?;

    Ok(time()
        .datetime(date_string)
        .child(format_date(&date, DISPLAY_FORMAT)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::date::ParseDateError;

    fn render(date_string: &str) -> String {
        date(DateProps {
            date_string: date_string.to_string(),
        })
        .unwrap()
        .render_to_string()
        .unwrap()
    }

    #[test]
    fn test_date() {
        assert_eq!(
            render("2020-09-15"),
            r#"<time datetime="2020-09-15">15 September, 2020</time>"#
        );
    }

    #[test]
    fn test_date_is_idempotent() {
        assert_eq!(render("2020-09-15"), render("2020-09-15"));
    }

    #[test]
    fn test_date_on_leap_day() {
        assert_eq!(
            render("2020-02-29"),
            r#"<time datetime="2020-02-29">29 February, 2020</time>"#
        );
    }

    #[test]
    fn test_date_keeps_datetime_input_verbatim() {
        assert_eq!(
            render("2020-09-15T10:00:00Z"),
            r#"<time datetime="2020-09-15T10:00:00Z">15 September, 2020</time>"#
        );
    }

    #[test]
    fn test_date_with_invalid_input() {
        let err = date(DateProps {
            date_string: "not-a-date".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ParseDateError::InvalidDate { .. }));
    }
}
