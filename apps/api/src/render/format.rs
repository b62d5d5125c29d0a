//! Text helpers shared by every template: escaping and date display.

use chrono::NaiveDate;

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes multi-line text, turning line breaks into `<br>`.
pub fn escape_multiline(text: &str) -> String {
    text.lines()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// `2021-03-15` and `2021-03` display as `Mar 2021`. Anything else is kept
/// verbatim (trimmed), so free-form dates like "Summer 2019" still render.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    raw.to_string()
}

/// Date range for an entry. A current position ends in "Present" and its
/// stored end date is ignored.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = display_date(start);
    let end = if current {
        "Present".to_string()
    } else {
        display_date(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} – {end}"),
    }
}

/// Joins the non-blank parts with `sep`.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D" it's</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; it&#39;s&lt;/b&gt;"
        );
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_multiline() {
        assert_eq!(escape_multiline("a < b\nc"), "a &lt; b<br>c");
    }

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date("2021-03-15"), "Mar 2021");
        assert_eq!(display_date("2021-03"), "Mar 2021");
        assert_eq!(display_date("Summer 2019"), "Summer 2019");
        assert_eq!(display_date("  "), "");
    }

    #[test]
    fn test_date_range_current_ignores_end() {
        assert_eq!(
            date_range("2020-01-01", "2021-06-01", true),
            "Jan 2020 – Present"
        );
        assert_eq!(
            date_range("2020-01-01", "2021-06-01", false),
            "Jan 2020 – Jun 2021"
        );
        assert_eq!(date_range("", "", true), "Present");
        assert_eq!(date_range("", "", false), "");
        assert_eq!(date_range("2020-01", "", false), "Jan 2020");
    }

    #[test]
    fn test_join_present_skips_blanks() {
        assert_eq!(join_present(&["Acme", " ", "Berlin"], ", "), "Acme, Berlin");
        assert_eq!(join_present(&["", ""], ", "), "");
    }
}
