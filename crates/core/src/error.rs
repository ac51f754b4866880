//! Error types for loading and navigating slide decks.
//!
//! Segmentation and classification never fail; these errors only come from
//! reading documents and moving around a deck.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input document.
    #[error("Failed to read document: {0}")]
    IoError(#[from] std::io::Error),

    /// The document bytes are not valid UTF-8.
    #[error("Document is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// A slide index past the end of the deck was requested.
    #[error("Slide {index} is out of range (deck has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },
}
