use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SessionError;
use crate::result::RecallOutcome;

use super::{Session, SessionState};

impl Session {
    /// Checks the user's guess for the next presented card.
    ///
    /// The presented card is drawn and returned to the back of the learn
    /// deck; the guess is pushed to the back of the recalled deck. After the
    /// last card the session moves to [`SessionState::Finished`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not recalling.
    pub fn recall(&mut self, guess: Card) -> Result<RecallOutcome, SessionError> {
        if self.state != SessionState::Recalling {
            return Err(SessionError::InvalidState);
        }

        let expected = self
            .presented
            .draw()
            .map_err(|_| SessionError::InvalidState)?;
        let position = self.recalled.size();
        let correct = expected == guess;
        if correct {
            self.correct += 1;
        }

        self.recalled.push_back([guess]);
        self.learn.push_back([expected]);

        if self.presented.is_empty() {
            self.state = SessionState::Finished;
            debug!(correct = self.correct, total = self.total, "session finished");
        }

        Ok(RecallOutcome {
            position,
            expected,
            guess,
            correct,
        })
    }

    /// Starts the same run again from the beginning.
    ///
    /// The learn deck already holds the presented cards in their original
    /// order, so the replay presents the same sequence. The score and the
    /// recalled deck are cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not finished.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Finished {
            return Err(SessionError::InvalidState);
        }

        self.recalled = Deck::empty();
        self.correct = 0;
        self.total = self.learn.size();
        self.state = SessionState::Presenting;
        debug!(total = self.total, "session restarted");
        Ok(())
    }
}
