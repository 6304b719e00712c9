//! Record of applied results, enabling single-step undo.
//!
//! Each successful apply pushes one [`MatchResult`]; each undo pops one.
//! History entries store only the fixture and the two scores; the ledger
//! recomputes the inverse deltas from those, so an entry is O(1) in space no
//! matter how large the standings table is.

use crate::error::{Error, Result};
use crate::fixtures::Fixture;

/// One applied result: the fixture plus the scores it was played with,
/// captured the moment it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// The pairing that was played.
    pub fixture: Fixture,
    /// Goals of the fixture's first participant.
    pub score_first: i32,
    /// Goals of the fixture's second participant.
    pub score_second: i32,
}

/// Last-in-first-out record of applied results.
///
/// Empty at tournament start; grows and shrinks in lock-step with the
/// fixture queue.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    entries: Vec<MatchResult>,
}

impl MatchHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an applied result.
    pub fn push(&mut self, result: MatchResult) {
        self.entries.push(result);
    }

    /// Removes and returns the most recently applied result.
    ///
    /// # Errors
    /// [`Error::EmptyHistory`] when nothing has been played yet. This is a
    /// user-visible, non-fatal condition; the history is left untouched.
    pub fn pop(&mut self) -> Result<MatchResult> {
        self.entries.pop().ok_or(Error::EmptyHistory)
    }

    /// Number of applied results on record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no result has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ParticipantId;

    fn result(first: u32, second: u32, score: (i32, i32)) -> MatchResult {
        MatchResult {
            fixture: Fixture {
                first: ParticipantId(first),
                second: ParticipantId(second),
            },
            score_first: score.0,
            score_second: score.1,
        }
    }

    #[test]
    fn pop_on_empty_fails_and_stays_empty() {
        let mut history = MatchHistory::new();
        assert_eq!(history.pop().unwrap_err(), Error::EmptyHistory);
        assert!(history.is_empty());
    }

    #[test]
    fn pops_in_reverse_application_order() {
        let mut history = MatchHistory::new();
        history.push(result(0, 1, (2, 1)));
        history.push(result(0, 2, (1, 1)));
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop().unwrap(), result(0, 2, (1, 1)));
        assert_eq!(history.pop().unwrap(), result(0, 1, (2, 1)));
        assert_eq!(history.pop().unwrap_err(), Error::EmptyHistory);
    }
}
