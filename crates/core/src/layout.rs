//! Layout selection for a single slide body.
//!
//! The rules are evaluated in a fixed priority order and the first match
//! wins, so a body that loosely fits several archetypes always lands on the
//! same one:
//!
//! 1. title + subtitle, nothing else
//! 2. title alone
//! 3. quote lines without images
//! 4. one, two or more images with no other text
//! 5. anything else

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::markdown::{self, DEFAULT_ATTRIBUTION_MAX_LEN};
use crate::types::{ImageRef, QuoteBlock};

/// The fixed set of slide rendering templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutKind {
    /// Free-form content.
    #[default]
    Standard,
    /// A lone level-1 heading.
    TitleOnly,
    /// A level-1 heading followed by a level-2 heading.
    TitleSubtitle,
    /// Exactly one image.
    SingleImage,
    /// Exactly two images.
    DoubleImage,
    /// Three or more images.
    GridImages,
    /// A block quote with optional attribution.
    Quote,
}

impl LayoutKind {
    /// Every layout, in declaration order.
    pub const ALL: [LayoutKind; 7] = [
        LayoutKind::Standard,
        LayoutKind::TitleOnly,
        LayoutKind::TitleSubtitle,
        LayoutKind::SingleImage,
        LayoutKind::DoubleImage,
        LayoutKind::GridImages,
        LayoutKind::Quote,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::TitleOnly => "Title Only",
            Self::TitleSubtitle => "Title + Subtitle",
            Self::SingleImage => "Single Image",
            Self::DoubleImage => "Double Image",
            Self::GridImages => "Image Grid",
            Self::Quote => "Quote",
        }
    }

    /// The exact image count an image layout is chosen for, if fixed.
    pub fn image_count_hint(self) -> Option<usize> {
        match self {
            Self::SingleImage => Some(1),
            Self::DoubleImage => Some(2),
            _ => None,
        }
    }

    /// Layout for a slide made only of `count` images.
    fn for_image_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::SingleImage),
            2 => Some(Self::DoubleImage),
            _ => Some(Self::GridImages),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The layout decision plus the fields a renderer needs to fill it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    /// Selected layout archetype.
    pub layout: LayoutKind,

    /// First level-1 heading.
    pub title: Option<String>,

    /// First level-2 heading.
    pub subtitle: Option<String>,

    /// Inline images in source order.
    pub images: Vec<ImageRef>,

    /// Quote block, if the slide has quote lines.
    pub quote: Option<QuoteBlock>,
}

/// Stateless layout classifier.
#[derive(Debug, Clone)]
pub struct LayoutClassifier {
    /// Quote lines after the first shorter than this become the attribution.
    attribution_max_len: usize,
}

impl Default for LayoutClassifier {
    fn default() -> Self {
        Self {
            attribution_max_len: DEFAULT_ATTRIBUTION_MAX_LEN,
        }
    }
}

impl LayoutClassifier {
    /// Create a classifier with the default attribution threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length under which a later quote line counts as attribution.
    pub fn with_attribution_max_len(mut self, len: usize) -> Self {
        self.attribution_max_len = len;
        self
    }

    /// The configured attribution threshold.
    pub fn attribution_max_len(&self) -> usize {
        self.attribution_max_len
    }

    /// Select the layout of a slide body.
    pub fn classify(&self, body: &str) -> LayoutKind {
        let has_title = markdown::extract_heading(body, 1).is_some();
        let has_subtitle = markdown::extract_heading(body, 2).is_some();

        let rest = markdown::strip_first_heading(body);
        let has_images = markdown::has_images(&rest);
        let has_text = markdown::has_body_text(&rest);
        trace!(
            "title={} subtitle={} images={} text={}",
            has_title,
            has_subtitle,
            has_images,
            has_text
        );

        let kind = if has_title && has_subtitle && !has_images && !has_text {
            LayoutKind::TitleSubtitle
        } else if has_title && !has_images && !has_text {
            LayoutKind::TitleOnly
        } else if !has_images && markdown::has_quote_line(&rest) {
            LayoutKind::Quote
        } else {
            let image_count = markdown::extract_images(&rest).len();
            let images_only = markdown::strip_images(&rest).trim().is_empty();
            trace!("image_count={} images_only={}", image_count, images_only);

            LayoutKind::for_image_count(image_count)
                .filter(|_| images_only)
                .unwrap_or(LayoutKind::Standard)
        };

        debug!("Classified slide as {:?}", kind);
        kind
    }

    /// Select the layout and extract the fields needed to render it.
    pub fn classify_slide(&self, body: &str) -> SlideLayout {
        SlideLayout {
            layout: self.classify(body),
            title: markdown::extract_heading(body, 1),
            subtitle: markdown::extract_heading(body, 2),
            images: markdown::extract_images(body),
            quote: markdown::extract_quote_with(body, self.attribution_max_len),
        }
    }
}

/// Select the layout of a slide body with the default classifier.
pub fn classify(body: &str) -> LayoutKind {
    LayoutClassifier::default().classify(body)
}

/// Classify a slide body with the default classifier.
pub fn classify_slide(body: &str) -> SlideLayout {
    LayoutClassifier::default().classify_slide(body)
}
