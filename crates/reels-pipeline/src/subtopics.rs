//! Reading the subtopic list out of a completion

use std::collections::HashSet;

use crate::error::{ReelError, Result};

const FENCE: &str = "```";

/// Remove one optional markdown code fence around a completion
///
/// Accepted shape, after trimming surrounding whitespace:
///
/// ```text
/// [ "```" [ language-tag ] ] body [ "```" ]
/// ```
///
/// where `language-tag` is a run of ASCII letters, digits, `-`, `_` or `+`
/// directly after the opening fence (e.g. `json`). Text without fences is
/// returned trimmed and otherwise untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
            .unwrap_or(rest.len());
        body = &rest[tag_len..];
    }

    if let Some(rest) = body.trim_end().strip_suffix(FENCE) {
        body = rest;
    }

    body.trim()
}

/// Parse a completion into at most `limit` subtopic titles
///
/// The body must be a JSON array of strings. Titles are trimmed, blank
/// entries are skipped and repeats keep only their first occurrence.
pub fn parse(raw: &str, limit: usize) -> Result<Vec<String>> {
    let body = strip_code_fence(raw);

    let titles: Vec<String> =
        serde_json::from_str(body).map_err(|e| ReelError::UpstreamFormat(format!("expected a JSON array of strings: {e}")))?;

    let mut seen = HashSet::new();

    Ok(titles
        .into_iter()
        .map(|title| title.trim().to_owned())
        .filter(|title| !title.is_empty() && seen.insert(title.clone()))
        .take(limit)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPICS: [&str; 3] = ["Event Horizons", "Hawking Radiation", "Spaghettification"];

    #[test]
    fn fenced_and_bare_arrays_parse_identically() {
        let bare = r#"["Event Horizons","Hawking Radiation","Spaghettification"]"#;
        let fenced = format!("```json\n{bare}\n```");
        let untagged = format!("```\n{bare}\n```");

        assert_eq!(parse(bare, 3).unwrap(), TOPICS);
        assert_eq!(parse(&fenced, 3).unwrap(), TOPICS);
        assert_eq!(parse(&untagged, 3).unwrap(), TOPICS);
    }

    #[test]
    fn strips_single_line_fence() {
        assert_eq!(strip_code_fence(r#"```["a","b"]```"#), r#"["a","b"]"#);
        assert_eq!(strip_code_fence("  [1]\n```  "), "[1]");
        assert_eq!(strip_code_fence("plain text"), "plain text");
    }

    #[test]
    fn rejects_prose() {
        let err = parse("Sure! Here are three subtopics: gravity, light, time.", 3).unwrap_err();
        assert!(matches!(err, ReelError::UpstreamFormat(_)));
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(parse(r#"{"topics": ["a"]}"#, 3).is_err());
        assert!(parse("\"a\"", 3).is_err());
    }

    #[test]
    fn rejects_non_string_items() {
        assert!(parse(r#"["a", 2, "c"]"#, 3).is_err());
    }

    #[test]
    fn trims_skips_blank_and_caps_count() {
        let titles = parse(r#"[" Event Horizons ", "", "B", "C", "D"]"#, 3).unwrap();
        assert_eq!(titles, ["Event Horizons", "B", "C"]);
    }

    #[test]
    fn repeated_titles_count_once() {
        let titles = parse(r#"["A", "A", " A ", "B", "C"]"#, 3).unwrap();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn empty_array_is_not_a_format_error() {
        assert!(parse("[]", 3).unwrap().is_empty());
    }
}
