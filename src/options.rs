//! Session configuration options.

use core::time::Duration;

use crate::selector::SuitSelector;

/// Configuration options for a memorization session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deck_memorizer::{SessionOptions, Suit, SuitSelector};
///
/// let options = SessionOptions::default()
///     .with_selector(SuitSelector::suit(Suit::Diamond))
///     .with_max_deck_size(Some(8))
///     .with_show_associations(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Maximum number of cards to learn. `None` for no limit.
    pub max_deck_size: Option<usize>,
    /// Suits taking part in the session.
    pub selector: SuitSelector,
    /// Whether association words are shown next to presented cards.
    pub show_associations: bool,
    /// Time each card stays on screen while learning.
    pub learn_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_deck_size: None,
            selector: SuitSelector::all(),
            show_associations: false,
            learn_delay: Duration::ZERO,
        }
    }
}

impl SessionOptions {
    /// Sets the maximum number of cards to learn.
    ///
    /// # Example
    ///
    /// ```
    /// use deck_memorizer::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_max_deck_size(Some(10));
    /// assert_eq!(options.max_deck_size, Some(10));
    /// ```
    #[must_use]
    pub const fn with_max_deck_size(mut self, max_deck_size: Option<usize>) -> Self {
        self.max_deck_size = max_deck_size;
        self
    }

    /// Sets the suits taking part in the session.
    ///
    /// # Example
    ///
    /// ```
    /// use deck_memorizer::{SessionOptions, Suit, SuitSelector};
    ///
    /// let selector = SuitSelector::suit(Suit::Spade);
    /// let options = SessionOptions::default().with_selector(selector);
    /// assert_eq!(options.selector, selector);
    /// ```
    #[must_use]
    pub const fn with_selector(mut self, selector: SuitSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets whether association words are shown while learning.
    ///
    /// # Example
    ///
    /// ```
    /// use deck_memorizer::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_show_associations(true);
    /// assert!(options.show_associations);
    /// ```
    #[must_use]
    pub const fn with_show_associations(mut self, show_associations: bool) -> Self {
        self.show_associations = show_associations;
        self
    }

    /// Sets how long each card stays on screen while learning.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use deck_memorizer::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_learn_delay(Duration::from_millis(1500));
    /// assert_eq!(options.learn_delay, Duration::from_millis(1500));
    /// ```
    #[must_use]
    pub const fn with_learn_delay(mut self, learn_delay: Duration) -> Self {
        self.learn_delay = learn_delay;
        self
    }
}
