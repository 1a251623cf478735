use chrono::NaiveDate;
use std::borrow::Cow;

/// Fixture dates are ISO `YYYY-MM-DD`.
const ISO_DATE: &str = "%Y-%m-%d";

/// Article byline date, e.g. `2025-11-08` → `Nov 08, 2025`.
///
/// Anything that is not an ISO date is shown unchanged.
pub fn format_article_date(raw: &str) -> Cow<'_, str> {
    reformat(raw, "%b %d, %Y")
}

/// Issue and magazine date, e.g. `2025-11-01` → `November 2025`.
pub fn format_issue_date(raw: &str) -> Cow<'_, str> {
    reformat(raw, "%B %Y")
}

fn reformat<'a>(raw: &'a str, pattern: &str) -> Cow<'a, str> {
    match NaiveDate::parse_from_str(raw.trim(), ISO_DATE) {
        Ok(date) => Cow::Owned(date.format(pattern).to_string()),
        Err(_) => Cow::Borrowed(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_date() {
        assert_eq!(format_article_date("2025-11-08"), "Nov 08, 2025");
    }

    #[test]
    fn test_issue_date() {
        assert_eq!(format_issue_date("2025-11-01"), "November 2025");
    }

    #[test]
    fn test_free_text_date_is_unchanged() {
        assert_eq!(format_issue_date("November 2025 Edition"), "November 2025 Edition");
        assert_eq!(format_article_date(""), "");
    }
}
