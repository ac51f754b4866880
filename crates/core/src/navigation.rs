//! Position tracking for the presentation window.
//!
//! The deck is recomputed whenever the document changes, so the cursor only
//! keeps an index and a count and is told about new counts via `set_count`.

use log::debug;

use crate::error::{Error, Result};

/// Current slide of a running presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideCursor {
    current: usize,
    count: usize,
}

impl SlideCursor {
    /// Start at the first of `count` slides.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// 0-based index of the current slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides in the deck.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the cursor is on the first slide.
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the cursor is on the last slide, or the deck is empty.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.count
    }

    /// Advance one slide. Returns `false` at the end of the deck.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one slide. Returns `false` at the start of the deck.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to the first slide.
    pub fn first(&mut self) {
        self.current = 0;
    }

    /// Jump to the last slide.
    pub fn last(&mut self) {
        self.current = self.count.saturating_sub(1);
    }

    /// Jump to a 0-based slide index.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(Error::SlideOutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Update the slide count after the document changed.
    ///
    /// The current index is clamped to the new last slide.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.current >= count {
            let clamped = count.saturating_sub(1);
            debug!("Deck shrank to {} slides, moving from {} to {}", count, self.current, clamped);
            self.current = clamped;
        }
    }

    /// 1-based position for display, e.g. "3 / 12".
    pub fn progress(&self) -> String {
        if self.count == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.count)
    }
}
