//! Memorization session engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::association::Associations;
use crate::deck::Deck;
use crate::options::SessionOptions;
use crate::result::SessionSummary;

mod present;
mod recall;
pub mod state;

pub use state::SessionState;

/// A memorization session: learn a run of cards, then recall it in order.
///
/// The session owns three decks. Cards are drawn from the learn deck and
/// pushed to the back of the presented deck while learning. While
/// recalling, each presented card is drawn and compared with the user's
/// guess; guesses collect in the recalled deck and presented cards return
/// to the learn deck so the same run can be replayed with
/// [`restart`](Session::restart).
///
/// The session performs no I/O. Callers display presentations and feed
/// parsed guesses back in.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session options.
    options: SessionOptions,
    /// Association words by card.
    associations: Associations,
    /// Cards still to be presented.
    learn: Deck,
    /// Cards presented and not yet recalled.
    presented: Deck,
    /// Cards entered by the user, in recall order.
    recalled: Deck,
    /// Current state.
    state: SessionState,
    /// Number of cards in this run.
    total: usize,
    /// Number of correct guesses.
    correct: usize,
}

impl Session {
    /// Creates a session whose learn deck is shuffled with `rng`.
    ///
    /// The learn deck holds the cards of the full ordered deck matching
    /// [`SessionOptions::selector`], shuffled, then cut down to
    /// [`SessionOptions::max_deck_size`].
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        options: SessionOptions,
        associations: Associations,
        rng: &mut R,
    ) -> Self {
        let mut learn = options.selector.select(&Deck::full_ordered());
        learn.shuffle(rng);
        if let Some(max) = options.max_deck_size {
            learn.truncate(max);
        }
        let total = learn.size();
        debug!(total, "session created");

        Self {
            options,
            associations,
            learn,
            presented: Deck::empty(),
            recalled: Deck::empty(),
            state: SessionState::Presenting,
            total,
            correct: 0,
        }
    }

    /// Creates a session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deck_memorizer::{Associations, Session, SessionOptions};
    ///
    /// let a = Session::with_seed(SessionOptions::default(), Associations::new(), 7);
    /// let b = Session::with_seed(SessionOptions::default(), Associations::new(), 7);
    /// assert_eq!(a.remaining_to_present(), 52);
    /// assert_eq!(a.learn_deck(), b.learn_deck());
    /// ```
    #[must_use]
    pub fn with_seed(options: SessionOptions, associations: Associations, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(options, associations, &mut rng)
    }

    /// Creates a session seeded by [`fresh_seed`](crate::fresh_seed).
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn fresh(options: SessionOptions, associations: Associations) -> Self {
        Self::with_seed(options, associations, crate::deck::fresh_seed())
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the number of correct guesses so far.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.correct
    }

    /// Returns the number of cards in this run.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of cards not yet presented.
    #[must_use]
    pub fn remaining_to_present(&self) -> usize {
        match self.state {
            SessionState::Presenting => self.learn.size(),
            SessionState::Recalling | SessionState::Finished => 0,
        }
    }

    /// Returns the number of presented cards not yet recalled.
    #[must_use]
    pub fn remaining_to_recall(&self) -> usize {
        self.presented.size()
    }

    /// Returns the learn deck.
    ///
    /// Before presenting starts this is the shuffled run. After recalling it
    /// holds the presented cards again, in presentation order.
    #[must_use]
    pub const fn learn_deck(&self) -> &Deck {
        &self.learn
    }

    /// Returns the cards entered by the user, in recall order.
    #[must_use]
    pub const fn recalled(&self) -> &Deck {
        &self.recalled
    }

    /// Returns the session totals.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.total,
            recalled: self.recalled.size(),
            correct: self.correct,
        }
    }
}
