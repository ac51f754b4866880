//! Markdown micro-parsing for slide bodies.
//!
//! Only the handful of constructs that drive layout selection are recognised:
//! level-1/level-2 headings, inline images and `>` quote lines. Everything is
//! a line scan or an unanchored regex over the slide text.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Heading, ImageRef, QuoteBlock};

/// Inline image syntax `![alt](url)`, matched lazily so that two images on
/// the same line stay separate.
static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// A heading line of any level: one or more `#` then a space.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+ ").unwrap());

/// Quote lines after the first one that are shorter than this are taken as
/// the attribution.
pub const DEFAULT_ATTRIBUTION_MAX_LEN: usize = 30;

/// Em-dash, accepted as an attribution marker alongside `--`.
const EM_DASH: char = '\u{2014}';

/// Return the heading text if `line` is a heading of exactly `level`.
fn heading_text(line: &str, level: usize) -> Option<&str> {
    if level == 0 {
        return None;
    }
    let marker = "#".repeat(level);
    line.trim()
        .strip_prefix(marker.as_str())?
        .strip_prefix(' ')
        .map(str::trim)
}

/// Whether a line is a Markdown heading of any level.
///
/// `#tag` is text, not a heading.
pub fn is_heading_line(line: &str) -> bool {
    HEADING_REGEX.is_match(line.trim())
}

/// Find the first heading of the given level.
pub fn find_heading(body: &str, level: usize) -> Option<Heading> {
    body.lines()
        .find_map(|line| heading_text(line, level))
        .map(|text| Heading::new(level, text))
}

/// Extract the text of the first heading of the given level.
///
/// The marker count must match exactly: level 1 never matches a `##` line.
/// Later headings of the same level are ignored.
pub fn extract_heading(body: &str, level: usize) -> Option<String> {
    find_heading(body, level).map(|heading| heading.text)
}

/// Remove the first level-1 heading line, keeping every other line verbatim.
pub fn strip_first_heading(body: &str) -> String {
    let mut removed = false;
    body.split('\n')
        .filter(|line| {
            if !removed && heading_text(line, 1).is_some() {
                removed = true;
                return false;
            }
            true
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract all inline images, in source order.
pub fn extract_images(body: &str) -> Vec<ImageRef> {
    IMAGE_REGEX
        .captures_iter(body)
        .map(|caps| ImageRef::new(&caps[1], &caps[2]))
        .collect()
}

/// Whether the text contains any inline image syntax.
pub fn has_images(body: &str) -> bool {
    IMAGE_REGEX.is_match(body)
}

/// Remove every inline image occurrence.
pub fn strip_images(body: &str) -> String {
    IMAGE_REGEX.replace_all(body, "").into_owned()
}

/// Strip the quote marker from a line, if it is a quote line.
fn quote_line(line: &str) -> Option<&str> {
    line.trim().strip_prefix('>').map(str::trim)
}

/// Whether any line of the text is a `>` quote line.
pub fn has_quote_line(body: &str) -> bool {
    body.lines().any(|line| quote_line(line).is_some())
}

/// Whether anything other than blank lines and headings remains.
pub fn has_body_text(body: &str) -> bool {
    body.lines().any(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !is_heading_line(trimmed)
    })
}

/// Extract the quote block using the default attribution threshold.
pub fn extract_quote(body: &str) -> Option<QuoteBlock> {
    extract_quote_with(body, DEFAULT_ATTRIBUTION_MAX_LEN)
}

/// Extract the quote block of a slide.
///
/// A quote line is the attribution when it starts with `--` or an em-dash,
/// or when it is not the first quote line and is shorter than
/// `attribution_max_len` characters. The slot is overwritten, so the last
/// qualifying line wins. The remaining quote lines are joined with spaces.
pub fn extract_quote_with(body: &str, attribution_max_len: usize) -> Option<QuoteBlock> {
    let mut text_lines: Vec<&str> = Vec::new();
    let mut attribution = String::new();
    let mut seen = 0usize;

    for line in body.lines().filter_map(quote_line) {
        if line.starts_with("--") || line.starts_with(EM_DASH) {
            attribution = line
                .trim_start_matches(|c: char| c == '-' || c == EM_DASH)
                .trim()
                .to_string();
        } else if seen > 0 && line.chars().count() < attribution_max_len {
            attribution = line.to_string();
        } else {
            text_lines.push(line);
        }
        seen += 1;
    }

    if seen == 0 {
        return None;
    }

    Some(QuoteBlock::new(text_lines.join(" "), attribution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_heading_levels() {
        let body = "# Title\n\n## Subtitle\n\nText";
        assert_eq!(extract_heading(body, 1), Some("Title".to_string()));
        assert_eq!(extract_heading(body, 2), Some("Subtitle".to_string()));
        assert_eq!(extract_heading(body, 3), None);
    }

    #[test]
    fn test_extract_heading_exact_marker_count() {
        assert_eq!(extract_heading("## Only a subtitle", 1), None);
        assert_eq!(extract_heading("### Deep", 2), None);
        // A marker without a space is not a heading.
        assert_eq!(extract_heading("#hashtag", 1), None);
    }

    #[test]
    fn test_extract_heading_first_wins() {
        let body = "# First\n# Second";
        assert_eq!(extract_heading(body, 1), Some("First".to_string()));
    }

    #[test]
    fn test_extract_heading_indented() {
        assert_eq!(extract_heading("   # Indented  ", 1), Some("Indented".to_string()));
    }

    #[test]
    fn test_extract_heading_level_zero() {
        assert_eq!(extract_heading("# Title", 0), None);
    }

    #[test]
    fn test_find_heading() {
        let heading = find_heading("text\n## Sub", 2).unwrap();
        assert_eq!(heading.level, 2);
        assert_eq!(heading.text, "Sub");
    }

    #[test]
    fn test_strip_first_heading() {
        assert_eq!(strip_first_heading("# Title\n\nBody"), "\nBody");
        assert_eq!(strip_first_heading("# A\n# B"), "# B");
        assert_eq!(strip_first_heading("## Sub\ntext"), "## Sub\ntext");
        assert_eq!(strip_first_heading(""), "");
    }

    #[test]
    fn test_extract_images() {
        let body = "![one](a.png) and ![two](http://x/b.jpg)\n![](c.gif)";
        let images = extract_images(body);
        assert_eq!(
            images,
            vec![
                ImageRef::new("one", "a.png"),
                ImageRef::new("two", "http://x/b.jpg"),
                ImageRef::new("", "c.gif"),
            ]
        );
    }

    #[test]
    fn test_extract_images_ignores_links() {
        assert!(extract_images("[not an image](x.png)").is_empty());
        assert!(!has_images("[not an image](x.png)"));
    }

    #[test]
    fn test_strip_images() {
        assert_eq!(strip_images("a ![x](y) b ![z](w)"), "a  b ");
        assert_eq!(strip_images("![x](y)").trim(), "");
    }

    #[test]
    fn test_has_body_text() {
        assert!(!has_body_text("\n## Sub\n\n"));
        assert!(has_body_text("\n## Sub\nparagraph"));
        assert!(!has_body_text("   "));
        assert!(has_body_text("\n#rustlang is great"));
    }

    #[test]
    fn test_is_heading_line() {
        assert!(is_heading_line("# Title"));
        assert!(is_heading_line("  ### Deep"));
        assert!(!is_heading_line("#hashtag"));
        assert!(!is_heading_line("#"));
        assert!(!is_heading_line("text # not a heading"));
    }

    #[test]
    fn test_extract_quote_with_dash_attribution() {
        let quote = extract_quote("> Quoted text\n> -- Author").unwrap();
        assert_eq!(quote.text, "Quoted text");
        assert_eq!(quote.attribution, "Author");
    }

    #[test]
    fn test_extract_quote_with_em_dash() {
        let quote = extract_quote("> Stay hungry, stay foolish.\n> \u{2014} Steve Jobs").unwrap();
        assert_eq!(quote.text, "Stay hungry, stay foolish.");
        assert_eq!(quote.attribution, "Steve Jobs");
    }

    #[test]
    fn test_extract_quote_joins_lines() {
        let body = "> The first line of a rather long quotation\n> continues on a second long line here";
        let quote = extract_quote(body).unwrap();
        assert_eq!(
            quote.text,
            "The first line of a rather long quotation continues on a second long line here"
        );
        assert_eq!(quote.attribution, "");
    }

    #[test]
    fn test_extract_quote_short_line_becomes_attribution() {
        // The first quote line is never taken by the length rule.
        let quote = extract_quote("> Short\n> Also short").unwrap();
        assert_eq!(quote.text, "Short");
        assert_eq!(quote.attribution, "Also short");
    }

    #[test]
    fn test_extract_quote_last_attribution_wins() {
        let body = "> A long enough opening line of the quote\n> -- Someone\n> Later";
        let quote = extract_quote(body).unwrap();
        assert_eq!(quote.text, "A long enough opening line of the quote");
        assert_eq!(quote.attribution, "Later");
    }

    #[test]
    fn test_extract_quote_custom_threshold() {
        let quote = extract_quote_with("> First\n> Second line", 5).unwrap();
        assert_eq!(quote.text, "First Second line");
        assert_eq!(quote.attribution, "");
    }

    #[test]
    fn test_extract_quote_none() {
        assert_eq!(extract_quote("No quote here"), None);
        assert!(!has_quote_line("No quote here"));
        assert!(has_quote_line("text\n  > indented quote"));
    }
}
