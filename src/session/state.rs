//! Session state types.

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Cards are being shown one at a time.
    Presenting,
    /// The user is recalling the presented cards in order.
    Recalling,
    /// Every presented card has been recalled.
    Finished,
}
