//! Splitting a Markdown document into slide bodies.
//!
//! Slides are separated by a line of three or more hyphens. The delimiter
//! must sit on its own line, with a newline on both sides; anything else,
//! such as `--` or a `---` at the very start of the document, is content.

use log::debug;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A newline, three or more hyphens, then a newline.
static SLIDE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n-{3,}\n").unwrap());

/// Separator used when writing slides back into one document.
pub const SLIDE_SEPARATOR: &str = "\n\n---\n\n";

/// Push the trimmed part of `document[gap]` if anything is left.
fn push_trimmed(document: &str, gap: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let text = &document[gap.clone()];
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = gap.start + (text.len() - text.trim_start().len());
    spans.push(start..start + trimmed.len());
}

/// Byte ranges of every non-empty, trimmed slide body, in document order.
pub fn segment_spans(document: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;

    for delimiter in SLIDE_DELIMITER.find_iter(document) {
        push_trimmed(document, start..delimiter.start(), &mut spans);
        start = delimiter.end();
    }
    push_trimmed(document, start..document.len(), &mut spans);

    debug!("Segmented document into {} slides", spans.len());
    spans
}

/// Split a document into trimmed, non-empty slide bodies.
///
/// Empty gaps between delimiters are dropped. A document without any
/// delimiter is a single slide, or none when it is blank.
pub fn segment_into_slides(document: &str) -> Vec<&str> {
    segment_spans(document)
        .into_iter()
        .map(|span| &document[span])
        .collect()
}

/// Join slide bodies back into one document with the canonical separator.
///
/// Re-segmenting the result gives the same bodies, except when a body starts
/// or ends with a hyphen-rule line: the separator's newlines turn that line
/// into a delimiter of its own.
pub fn join_slides<S: AsRef<str>>(slides: &[S]) -> String {
    slides
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SLIDE_SEPARATOR)
}

/// Index of the slide a byte offset falls in.
///
/// Offsets between slides belong to the preceding slide, offsets before the
/// first slide to slide 0. Returns `None` when the document has no slides.
pub fn slide_index_at(document: &str, offset: usize) -> Option<usize> {
    let spans = segment_spans(document);
    if spans.is_empty() {
        return None;
    }
    Some(spans.iter().rposition(|span| span.start <= offset).unwrap_or(0))
}
