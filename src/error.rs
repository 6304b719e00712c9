//! Error kinds shared across the engine.
//!
//! Two families live here. [`Error::InvalidScoreFormat`], [`Error::EmptyHistory`]
//! and [`Error::NoPendingFixture`] are expected, user-visible conditions: the
//! front-end reports them and lets the user retry, and they never leave the
//! tournament state half-updated. [`Error::InvalidRosterSize`] blocks a
//! tournament from starting at all. [`Error::UnknownParticipant`] signals that
//! the fixture queue and the standings table fell out of sync, which cannot
//! happen while state transitions go through [`Tournament`](crate::tournament::Tournament).

use thiserror::Error;

use crate::roster::ParticipantId;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while driving a tournament.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two participants were registered.
    #[error("a league needs at least two participants, got {0}")]
    InvalidRosterSize(usize),

    /// The score text matched none of the accepted formats.
    #[error("unrecognized score {0:?}: expected \"2x1\" or \"2 1\"")]
    InvalidScoreFormat(String),

    /// Undo was requested before any result was applied.
    #[error("no played match to undo")]
    EmptyHistory,

    /// A result was entered although every fixture has been played.
    #[error("all fixtures have already been played")]
    NoPendingFixture,

    /// A fixture referenced a participant missing from the standings table.
    #[error("participant {0} is not in the standings table")]
    UnknownParticipant(ParticipantId),
}

impl Error {
    /// True for conditions the front-end should report and let the user retry.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidScoreFormat(_) => true,
            Error::EmptyHistory => true,
            Error::NoPendingFixture => true,
            Error::InvalidRosterSize(_) => false,
            Error::UnknownParticipant(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_classification() {
        assert!(Error::EmptyHistory.is_recoverable());
        assert!(Error::InvalidScoreFormat("?".into()).is_recoverable());
        assert!(!Error::InvalidRosterSize(1).is_recoverable());
        assert!(!Error::UnknownParticipant(ParticipantId(7)).is_recoverable());
    }

    #[test]
    fn messages_name_the_offender() {
        let msg = Error::InvalidScoreFormat("2-1".into()).to_string();
        assert!(msg.contains("2-1"));
        let msg = Error::InvalidRosterSize(1).to_string();
        assert!(msg.contains('1'));
    }
}
