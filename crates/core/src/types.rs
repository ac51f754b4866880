//! Domain types for segmented and classified slide decks.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::layout::{LayoutClassifier, LayoutKind, SlideLayout};
use crate::segment::segment_into_slides;

/// A Markdown heading consulted for layout selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Number of leading `#` characters.
    pub level: usize,

    /// Heading text without the marker.
    pub text: String,
}

impl Heading {
    /// Create a heading of the given level.
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// An inline image `![alt](url)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Alt text, verbatim.
    pub alt: String,

    /// URL or path, verbatim and unresolved.
    pub url: String,
}

impl ImageRef {
    /// Create an image reference.
    pub fn new(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            url: url.into(),
        }
    }
}

/// A block quote and its attribution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBlock {
    /// Quote lines joined with single spaces.
    pub text: String,

    /// Attribution, empty when none was found.
    pub attribution: String,
}

impl QuoteBlock {
    /// Create a quote block.
    pub fn new(text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attribution: attribution.into(),
        }
    }

    /// Whether an attribution line was found.
    pub fn has_attribution(&self) -> bool {
        !self.attribution.is_empty()
    }
}

/// A single slide with its layout decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSlide {
    /// 0-based position in the deck.
    pub index: usize,

    /// Trimmed slide body.
    pub body: String,

    /// Layout tag and extracted fields.
    #[serde(flatten)]
    pub layout: SlideLayout,
}

impl ClassifiedSlide {
    /// The layout archetype of this slide.
    pub fn kind(&self) -> LayoutKind {
        self.layout.layout
    }

    /// Title for listings: the level-1 heading, or else the first non-empty line.
    pub fn display_title(&self) -> Option<&str> {
        self.layout.title.as_deref().or_else(|| {
            self.body
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
        })
    }
}

/// An entire document split into classified slides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in document order.
    pub slides: Vec<ClassifiedSlide>,
}

impl Deck {
    /// Segment and classify a document with the default classifier.
    pub fn parse(document: &str) -> Self {
        Self::parse_with(document, &LayoutClassifier::default())
    }

    /// Segment and classify a document.
    pub fn parse_with(document: &str, classifier: &LayoutClassifier) -> Self {
        let slides = segment_into_slides(document)
            .into_iter()
            .enumerate()
            .map(|(index, body)| ClassifiedSlide {
                index,
                body: body.to_string(),
                layout: classifier.classify_slide(body),
            })
            .collect();

        Self { slides }
    }

    /// Read a document from a reader and parse it.
    pub fn from_reader<R: Read>(mut reader: R, classifier: &LayoutClassifier) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let document = String::from_utf8(bytes)?;
        Ok(Self::parse_with(&document, classifier))
    }

    /// Read a document from a file and parse it.
    pub fn from_path(path: &Path, classifier: &LayoutClassifier) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), classifier)
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get a slide by 0-based index.
    pub fn slide(&self, index: usize) -> Option<&ClassifiedSlide> {
        self.slides.get(index)
    }

    /// Iterate over the slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedSlide> {
        self.slides.iter()
    }

    /// Number of slides per layout, in `LayoutKind::ALL` order.
    pub fn layout_counts(&self) -> Vec<(LayoutKind, usize)> {
        LayoutKind::ALL
            .iter()
            .map(|&kind| (kind, self.iter().filter(|s| s.kind() == kind).count()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a ClassifiedSlide;
    type IntoIter = std::slice::Iter<'a, ClassifiedSlide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const DECK: &str = "# Welcome\n\n## A short talk\n\n---\n\n# Agenda\n\n- One\n- Two\n\n---\n\n![diagram](img/arch.png)\n\n---\n\n> Simplicity is prerequisite for reliability.\n> -- Dijkstra\n";

    #[test]
    fn test_parse_deck() {
        let deck = Deck::parse(DECK);

        assert_eq!(deck.len(), 4);
        let kinds: Vec<LayoutKind> = deck.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                LayoutKind::TitleSubtitle,
                LayoutKind::Standard,
                LayoutKind::SingleImage,
                LayoutKind::Quote,
            ]
        );
        assert_eq!(deck.slide(1).unwrap().index, 1);
        assert_eq!(deck.slide(1).unwrap().body, "# Agenda\n\n- One\n- Two");
        assert!(deck.slide(4).is_none());
    }

    #[test]
    fn test_parse_empty_document() {
        let deck = Deck::parse("  \n\n ");
        assert!(deck.is_empty());
        assert!(deck.layout_counts().iter().all(|&(_, n)| n == 0));
    }

    #[test]
    fn test_layout_counts() {
        let deck = Deck::parse(DECK);
        let counts = deck.layout_counts();

        assert_eq!(counts.len(), LayoutKind::ALL.len());
        assert!(counts.contains(&(LayoutKind::Standard, 1)));
        assert!(counts.contains(&(LayoutKind::Quote, 1)));
        assert!(counts.contains(&(LayoutKind::GridImages, 0)));
    }

    #[test]
    fn test_display_title() {
        let deck = Deck::parse(DECK);
        assert_eq!(deck.slide(0).unwrap().display_title(), Some("Welcome"));
        assert_eq!(
            deck.slide(3).unwrap().display_title(),
            Some("> Simplicity is prerequisite for reliability.")
        );
    }

    #[test]
    fn test_from_reader() {
        let deck = Deck::from_reader(DECK.as_bytes(), &LayoutClassifier::new()).unwrap();
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = &[0x23, 0x20, 0xFF, 0xFE];
        let result = Deck::from_reader(bytes, &LayoutClassifier::new());
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Deck::from_path(Path::new("/nonexistent/deck.md"), &LayoutClassifier::new());
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_serialize_classified_slide() {
        let deck = Deck::parse("> Quoted text\n> -- Author");
        let json = serde_json::to_value(&deck.slides[0]).unwrap();

        assert_eq!(json["index"], 0);
        assert_eq!(json["layout"], "quote");
        assert_eq!(json["title"], serde_json::Value::Null);
        assert_eq!(json["quote"]["text"], "Quoted text");
        assert_eq!(json["quote"]["attribution"], "Author");
        assert!(json["images"].as_array().unwrap().is_empty());
    }
}
