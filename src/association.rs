//! Card-to-word associations shown alongside cards while learning.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use tracing::{debug, warn};

use crate::card::Card;
use crate::error::AssociationError;

/// A single record of an association document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationRecord {
    /// The card, in card text form such as `"H-A"` or `"heart-a"`.
    pub card: Card,
    /// The word associated with the card.
    pub word: String,
}

/// A record as written in the document, before its card is parsed.
#[derive(Deserialize)]
struct RawRecord {
    card: String,
    word: String,
}

/// A mapping from cards to association words.
///
/// The document form is a JSON array of records:
///
/// ```
/// use deck_memorizer::{Associations, Card};
///
/// let json = r#"[{"card": "H-A", "word": "apple"}, {"card": "d-10", "word": "tent"}]"#;
/// let associations = Associations::from_json_str(json).unwrap();
/// assert_eq!(associations.get(&"heart-a".parse::<Card>().unwrap()), Some("apple"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Associations {
    words: HashMap<Card, String>,
}

impl Associations {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an association document.
    ///
    /// When a card appears more than once, the last record wins.
    ///
    /// # Errors
    ///
    /// Returns [`AssociationError::Json`] if the text is not a JSON array of
    /// `{card, word}` records, and [`AssociationError::Card`] if a record's
    /// card does not parse.
    pub fn from_json_str(text: &str) -> Result<Self, AssociationError> {
        let records: Vec<RawRecord> =
            serde_json::from_str(text).map_err(|err| AssociationError::Json(err.to_string()))?;

        let mut associations = Self::new();
        for record in records {
            associations.insert(record.card.parse::<Card>()?, record.word);
        }
        Ok(associations)
    }

    /// Loads an association file.
    ///
    /// A missing file is not an error: it yields an empty mapping and logs a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`AssociationError::Io`] if the file exists but cannot be
    /// read, and the errors of [`from_json_str`](Self::from_json_str) if its
    /// contents are malformed.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn load(path: &std::path::Path) -> Result<Self, AssociationError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "associations file not found, continuing without it");
                return Ok(Self::new());
            }
            Err(err) => {
                return Err(AssociationError::Io {
                    path: path.display().to_string(),
                    message: err.to_string(),
                });
            }
        };

        let associations = Self::from_json_str(&text)?;
        debug!(path = %path.display(), count = associations.len(), "associations loaded");
        Ok(associations)
    }

    /// Renders the mapping as an association document, ordered by card.
    ///
    /// # Errors
    ///
    /// Returns [`AssociationError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, AssociationError> {
        let mut records: Vec<AssociationRecord> = self
            .words
            .iter()
            .map(|(card, word)| AssociationRecord {
                card: *card,
                word: word.clone(),
            })
            .collect();
        records.sort_by_key(|record| record.card.absolute_rank());
        serde_json::to_string_pretty(&records).map_err(|err| AssociationError::Json(err.to_string()))
    }

    /// Sets the word for a card, returning the previous one.
    pub fn insert(&mut self, card: Card, word: impl Into<String>) -> Option<String> {
        self.words.insert(card, word.into())
    }

    /// Returns the word associated with a card.
    #[must_use]
    pub fn get(&self, card: &Card) -> Option<&str> {
        self.words.get(card).map(String::as_str)
    }

    /// Returns the number of associated cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether no card has an association.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the associations in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Card, &str)> {
        self.words.iter().map(|(card, word)| (card, word.as_str()))
    }
}

impl FromIterator<AssociationRecord> for Associations {
    fn from_iter<I: IntoIterator<Item = AssociationRecord>>(iter: I) -> Self {
        let mut associations = Self::new();
        for record in iter {
            associations.insert(record.card, record.word);
        }
        associations
    }
}
