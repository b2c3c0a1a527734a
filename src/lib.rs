//! A playing-card memorization trainer with optional `no_std` support.
//!
//! The crate provides [`Card`] and [`Deck`] values with a compact text
//! encoding and unbiased shuffling, plus a [`Session`] type that runs the
//! learn-then-recall flow without doing any I/O itself.
//!
//! # Example
//!
//! ```
//! use deck_memorizer::{Card, Deck, DrawError};
//!
//! let mut deck = Deck::full_ordered();
//! deck.shuffle_with_seed(42);
//! assert_eq!(deck.size(), 52);
//!
//! let card = deck.draw().unwrap();
//! let text = card.to_string();
//! assert_eq!(text.parse::<Card>(), Ok(card));
//!
//! let mut empty = Deck::empty();
//! assert_eq!(empty.draw(), Err(DrawError::EmptyDeck));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod association;
pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod result;
pub mod selector;
pub mod session;

// Re-export main types
pub use association::{AssociationRecord, Associations};
pub use card::{Card, DECK_SIZE, Rank, SUIT_SIZE, Suit};
#[cfg(feature = "std")]
pub use deck::fresh_seed;
pub use deck::Deck;
pub use error::{AssociationError, DrawError, ParseCardError, SelectorError, SessionError};
pub use options::SessionOptions;
pub use result::{Presentation, RecallOutcome, SessionSummary};
pub use selector::SuitSelector;
pub use session::{Session, SessionState};
