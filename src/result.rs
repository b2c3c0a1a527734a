//! Result types produced while learning and recalling.

use alloc::string::String;

use crate::card::Card;

/// A card shown to the user during the learning phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Zero-based position of the card in the learned sequence.
    pub position: usize,
    /// The card being presented.
    pub card: Card,
    /// The association word, when associations are shown and one exists.
    pub association: Option<String>,
}

/// The outcome of a single recall guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecallOutcome {
    /// Zero-based position of the card in the learned sequence.
    pub position: usize,
    /// The card that was presented at this position.
    pub expected: Card,
    /// The card the user recalled.
    pub guess: Card,
    /// Whether the guess matched the presented card.
    pub correct: bool,
}

/// Totals of a finished or running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of cards presented.
    pub total: usize,
    /// Number of cards recalled so far.
    pub recalled: usize,
    /// Number of correct guesses.
    pub correct: usize,
}

impl SessionSummary {
    /// Returns whether every presented card was recalled correctly.
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.recalled == self.total && self.correct == self.total
    }
}
