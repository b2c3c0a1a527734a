//! Suit selectors for choosing which cards take part in a session.

use core::ops::{BitOr, BitOrAssign};
use core::str::FromStr;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::SelectorError;

/// A set of suits. A card matches when its suit is in the set.
///
/// Selectors combine with `|`. The default selector matches nothing.
///
/// ```
/// use deck_memorizer::{Deck, Suit, SuitSelector};
///
/// let selector = "D".parse::<SuitSelector>().unwrap() | SuitSelector::suit(Suit::Heart);
/// assert_eq!(selector.select(&Deck::full_ordered()).size(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuitSelector {
    mask: u8,
}

impl SuitSelector {
    /// A selector that matches no card.
    #[must_use]
    pub const fn none() -> Self {
        Self { mask: 0 }
    }

    /// A selector that matches every card.
    #[must_use]
    pub const fn all() -> Self {
        Self { mask: 0b1111 }
    }

    /// A selector that matches a single suit.
    #[must_use]
    pub const fn suit(suit: Suit) -> Self {
        Self {
            mask: 1 << suit.index(),
        }
    }

    /// Parses a selector code: `D`, `H`, `S` or `C`, in any case.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownCode`] for any other input.
    pub fn parse(code: &str) -> Result<Self, SelectorError> {
        let mut chars = code.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Suit::from_code(letter)
                .map(Self::suit)
                .ok_or_else(|| SelectorError::UnknownCode(code.into())),
            _ => Err(SelectorError::UnknownCode(code.into())),
        }
    }

    /// Returns whether the selector matches nothing.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.mask == 0
    }

    /// Returns whether the card's suit is selected.
    #[must_use]
    pub const fn matches(self, card: &Card) -> bool {
        self.mask & (1 << card.suit.index()) != 0
    }

    /// Returns a new deck with the matching cards of `deck`, in deck order.
    #[must_use]
    pub fn select(self, deck: &Deck) -> Deck {
        deck.iter().copied().filter(|card| self.matches(card)).collect()
    }
}

impl BitOr for SuitSelector {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            mask: self.mask | rhs.mask,
        }
    }
}

impl BitOrAssign for SuitSelector {
    fn bitor_assign(&mut self, rhs: Self) {
        self.mask |= rhs.mask;
    }
}

impl FromStr for SuitSelector {
    type Err = SelectorError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::parse(code)
    }
}

impl FromIterator<Self> for SuitSelector {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), BitOr::bitor)
    }
}
