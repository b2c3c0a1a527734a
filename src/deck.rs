//! An ordered, mutable sequence of cards.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, SUIT_SIZE, Suit};
use crate::error::DrawError;

/// An ordered deck of cards. The front is the next card to draw.
///
/// Decks built with [`Deck::full_ordered`] and [`Deck::single_suit`] hold
/// no duplicates. An [`empty`](Deck::empty) deck accepts whatever is pushed
/// into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates the 52-card deck, unshuffled.
    ///
    /// Suits come in the order Heart, Diamond, Spade, Club, and ranks within
    /// each suit from Ace to King.
    #[must_use]
    pub fn full_ordered() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::DECK_ORDER {
            cards.extend(Rank::ALL.into_iter().map(|rank| Card::new(suit, rank)));
        }
        Self { cards }
    }

    /// Creates the 13 cards of one suit, from Ace to King.
    #[must_use]
    pub fn single_suit(suit: Suit) -> Self {
        let mut cards = VecDeque::with_capacity(SUIT_SIZE);
        cards.extend(Rank::ALL.into_iter().map(|rank| Card::new(suit, rank)));
        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck holding the given cards, first card at the front.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the deck in place with the Fisher–Yates algorithm.
    ///
    /// For each index `i` from the back down to 1, a uniform index `n` in
    /// `0..=i` is drawn from `rng` and positions `i` and `n` are swapped.
    /// Decks with fewer than two cards are left untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() < 2 {
            return;
        }

        for i in (1..self.cards.len()).rev() {
            let n = rng.random_range(0..=i);
            self.cards.swap(i, n);
        }
        debug!(size = self.cards.len(), "deck shuffled");
    }

    /// Shuffles the deck with a ChaCha generator seeded from `seed`.
    ///
    /// The same seed always produces the same permutation.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Shuffles the deck with a generator freshly seeded by [`fresh_seed`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle_fresh(&mut self) {
        self.shuffle_with_seed(fresh_seed());
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck has no cards. The deck
    /// is unchanged in that case.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop_front().ok_or(DrawError::EmptyDeck)?;
        trace!(%card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Appends cards to the back of the deck, in the given order.
    pub fn push_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Prepends cards to the front of the deck, keeping their relative order.
    ///
    /// ```
    /// use deck_memorizer::{Card, Deck, Rank, Suit};
    ///
    /// let x = Card::new(Suit::Heart, Rank::Ace);
    /// let y = Card::new(Suit::Club, Rank::Two);
    /// let z = Card::new(Suit::Spade, Rank::King);
    ///
    /// let mut deck = Deck::from_cards([z]);
    /// deck.push_front([x, y]);
    /// assert_eq!(deck.iter().copied().collect::<Vec<_>>(), [x, y, z]);
    /// ```
    pub fn push_front<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
        I::IntoIter: DoubleEndedIterator,
    {
        for card in cards.into_iter().rev() {
            self.cards.push_front(card);
        }
    }

    /// Returns the card that the next [`draw`](Deck::draw) would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns whether the deck holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Keeps only the cards for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&Card) -> bool) {
        self.cards.retain(keep);
    }

    /// Shortens the deck to at most `len` cards, dropping from the back.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    /// Iterates over the cards from front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.push_back(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Returns a seed that differs between calls within a process.
///
/// The seed mixes the wall clock with a per-process call counter, so two
/// shuffles in the same clock tick still get different seeds.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn fresh_seed() -> u64 {
    use core::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static CALLS: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let call = CALLS.fetch_add(1, Ordering::Relaxed);
    nanos ^ call.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
