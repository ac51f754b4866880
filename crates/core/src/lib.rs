//! Slide segmentation and layout classification for Markdown presentations.

pub mod error;
pub mod layout;
pub mod markdown;
pub mod navigation;
pub mod segment;
pub mod types;

pub use error::{Error, Result};
pub use layout::{classify, classify_slide, LayoutClassifier, LayoutKind, SlideLayout};
pub use navigation::SlideCursor;
pub use segment::{join_slides, segment_into_slides, segment_spans, slide_index_at, SLIDE_SEPARATOR};
pub use types::{ClassifiedSlide, Deck, Heading, ImageRef, QuoteBlock};
