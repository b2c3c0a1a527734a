//! Card types and their text encoding.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseCardError;

/// Card suit.
///
/// The declaration order is the order used by [`Card::absolute_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Spades.
    Spade,
}

impl Suit {
    /// Suit order used when building ordered decks.
    pub const DECK_ORDER: [Self; 4] = [Self::Heart, Self::Diamond, Self::Spade, Self::Club];

    /// Suit order used by [`Card::absolute_rank`].
    pub const INDEX_ORDER: [Self; 4] = [Self::Heart, Self::Diamond, Self::Club, Self::Spade];

    /// Returns the suit's position in [`Suit::INDEX_ORDER`].
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Heart => 0,
            Self::Diamond => 1,
            Self::Club => 2,
            Self::Spade => 3,
        }
    }

    /// Returns the lowercase suit name used when formatting cards.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Diamond => "diamond",
            Self::Club => "club",
            Self::Spade => "spade",
        }
    }

    /// Maps a single-letter suit code (`H`, `D`, `S`, `C`, any case).
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'H' => Some(Self::Heart),
            'D' => Some(Self::Diamond),
            'S' => Some(Self::Spade),
            'C' => Some(Self::Club),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Accepts a single-letter code or a full suit name, ignoring case.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Self::from_code(code).ok_or_else(|| ParseCardError::UnknownSuit(token.into()));
        }

        Self::INDEX_ORDER
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseCardError::UnknownSuit(token.into()))
    }
}

/// Card rank. Ace is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value, if it is in 1..=13.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=13) {
            Some(Self::ALL[value as usize - 1])
        } else {
            None
        }
    }

    /// Returns the face letter for Ace, Jack, Queen and King.
    #[must_use]
    pub const fn face_letter(self) -> Option<char> {
        match self {
            Self::Ace => Some('a'),
            Self::Jack => Some('j'),
            Self::Queen => Some('q'),
            Self::King => Some('k'),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face_letter() {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            let letter = letter.to_ascii_lowercase();
            if let Some(rank) = Self::ALL
                .into_iter()
                .find(|rank| rank.face_letter() == Some(letter))
            {
                return Ok(rank);
            }
        }

        let value: i64 = token.parse().map_err(|_| {
            if !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit()) {
                ParseCardError::RankOutOfRange(token.into())
            } else {
                ParseCardError::UnknownRank(token.into())
            }
        })?;
        if !(2..=10).contains(&value) {
            return Err(ParseCardError::RankOutOfRange(token.into()));
        }

        Self::from_value(value as u8).ok_or_else(|| ParseCardError::RankOutOfRange(token.into()))
    }
}

/// A playing card.
///
/// Cards are plain values: they are compared and hashed by suit and rank
/// and can be used as map keys. The text form is `<suit>-<rank>`:
///
/// ```
/// use deck_memorizer::{Card, Rank, Suit};
///
/// let card: Card = "d-10".parse().unwrap();
/// assert_eq!(card, Card::new(Suit::Diamond, Rank::Ten));
/// assert_eq!(card.to_string(), "diamond-10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns `suit_index * 13 + rank_value`, a total order over all cards.
    ///
    /// Suits are indexed Heart, Diamond, Club, Spade, which differs from the
    /// suit order of [`Deck::full_ordered`](crate::Deck::full_ordered).
    #[must_use]
    pub const fn absolute_rank(self) -> u8 {
        self.suit.index() * 13 + self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut parts = input.split('-');
        let (Some(suit), Some(rank), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseCardError::InvalidFormat(input.into()));
        };

        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a single suit.
pub const SUIT_SIZE: usize = 13;
