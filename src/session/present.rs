use alloc::string::ToString;

use tracing::debug;

use crate::error::SessionError;
use crate::result::Presentation;

use super::{Session, SessionState};

impl Session {
    /// Presents the next card of the learn deck.
    ///
    /// The card moves to the back of the presented deck. Returns `Ok(None)`
    /// once the learn deck is exhausted; the session then moves to
    /// [`SessionState::Recalling`], or straight to
    /// [`SessionState::Finished`] if nothing was presented.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not presenting.
    pub fn present(&mut self) -> Result<Option<Presentation>, SessionError> {
        if self.state != SessionState::Presenting {
            return Err(SessionError::InvalidState);
        }

        let Ok(card) = self.learn.draw() else {
            self.state = if self.presented.is_empty() {
                SessionState::Finished
            } else {
                SessionState::Recalling
            };
            debug!(presented = self.presented.size(), state = ?self.state, "presenting done");
            return Ok(None);
        };

        let position = self.presented.size();
        self.presented.push_back([card]);

        let association = if self.options.show_associations {
            self.associations.get(&card).map(ToString::to_string)
        } else {
            None
        };

        Ok(Some(Presentation {
            position,
            card,
            association,
        }))
    }
}
