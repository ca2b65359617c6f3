//! Free-text article entry
//!
//! Articles are pasted one per line as `<title> <duration>`, where the duration is the
//! trailing positive whole number of minutes. `<title>, <duration>` is accepted too.
//! Anything else is not an article line and is skipped by the batch entry.

/// Parse a single `<title> <duration>` line
///
/// Returns `None` when the line does not have that shape: no separator, an empty
/// title, or a trailing token that is not a positive integer. The token must be
/// plain digits, so signed forms such as `+30` are not durations.
///
/// # Examples
/// ```
/// use study_planner::parse_article_line;
///
/// assert_eq!(parse_article_line("Cell cycle 45"), Some(("Cell cycle".to_string(), 45)));
/// assert_eq!(parse_article_line("Intro, 30"), Some(("Intro".to_string(), 30)));
/// assert_eq!(parse_article_line("Intro 30min"), None);
/// ```
pub fn parse_article_line(line: &str) -> Option<(String, u32)> {
    let line = line.trim();
    let (head, token) = line.rsplit_once(|c: char| c.is_whitespace() || c == ',')?;

    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let duration = token.parse::<u32>().ok().filter(|minutes| *minutes > 0)?;

    let title = head.trim_end().trim_end_matches(',').trim();
    if title.is_empty() {
        return None;
    }

    Some((title.to_string(), duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace_separated() {
        assert_eq!(
            parse_article_line("Intro 30"),
            Some(("Intro".to_string(), 30))
        );
        assert_eq!(
            parse_article_line("  Mitosis and meiosis\t50  "),
            Some(("Mitosis and meiosis".to_string(), 50))
        );
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(
            parse_article_line("Intro,30"),
            Some(("Intro".to_string(), 30))
        );
        assert_eq!(
            parse_article_line("Intro , 30"),
            Some(("Intro".to_string(), 30))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert_eq!(parse_article_line(""), None);
        assert_eq!(parse_article_line("30"), None);
        assert_eq!(parse_article_line("Intro"), None);
        assert_eq!(parse_article_line("Intro thirty"), None);
        assert_eq!(parse_article_line("Intro 0"), None);
        assert_eq!(parse_article_line("Intro -15"), None);
        assert_eq!(parse_article_line("Intro +30"), None);
        assert_eq!(parse_article_line("Intro 2.5"), None);
        assert_eq!(parse_article_line(", 30"), None);
    }

    #[test]
    fn test_parse_keeps_numbers_inside_title() {
        assert_eq!(
            parse_article_line("Chapter 3 review 25"),
            Some(("Chapter 3 review".to_string(), 25))
        );
    }
}
