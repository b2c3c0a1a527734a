//! Error types for card, deck and session operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while parsing card text.
///
/// Every variant carries the token that could not be understood so callers
/// can echo it back when reprompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input does not consist of exactly two `-` separated parts.
    #[error("card format is invalid: {0:?}")]
    InvalidFormat(String),
    /// The suit token is not one of `H`, `D`, `S`, `C` or a suit name.
    #[error("could not recognize {0:?} as suit")]
    UnknownSuit(String),
    /// The rank token is neither a face letter nor a number.
    #[error("could not recognize {0:?} as rank")]
    UnknownRank(String),
    /// The rank token is a number outside of 2..=10.
    #[error("{0:?} is not a valid rank")]
    RankOutOfRange(String),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("empty deck")]
    EmptyDeck,
}

/// Errors that can occur while parsing a suit selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector code is not one of `D`, `H`, `S`, `C`.
    #[error("could not parse selector: {0:?}")]
    UnknownCode(String),
}

/// Errors that can occur while loading card associations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssociationError {
    /// The association document is not a JSON array of `{card, word}` records.
    #[error("invalid association document: {0}")]
    Json(String),
    /// A record names a card that does not parse.
    #[error("invalid card in association document: {0}")]
    Card(#[from] ParseCardError),
    /// The association file exists but could not be read.
    #[error("could not read association file {path}: {message}")]
    Io {
        /// Path of the file.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

/// Errors that can occur while driving a memorization session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The operation is not valid in the current session state.
    #[error("invalid session state for this operation")]
    InvalidState,
}
