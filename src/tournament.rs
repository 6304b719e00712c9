//! Tournament session: one value owning all live state.
//!
//! A [`Tournament`] bundles the roster, the standings table, the fixture
//! queue, and the match history, and moves them in lock-step: applying a
//! result pops the queue, updates two table rows, and pushes the history;
//! undoing pops the history, reverts the rows, and pushes the fixture back
//! to the queue front.
//!
//! The caller owns the whole value and threads it through every call; the
//! crate keeps nothing between calls, which is what makes a session trivially
//! safe single-threaded, and dropping the value is the reset operation.
//! Every method is one atomic synchronous call: it either fully applies or
//! leaves the session untouched.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fixtures::{generate_fixtures, Fixture, FixtureQueue};
use crate::match_history::{MatchHistory, MatchResult};
use crate::roster::Roster;
use crate::standings::{StandingsTable, TableRow};

/// A running single round-robin tournament.
pub struct Tournament {
    roster: Roster,
    table: StandingsTable,
    queue: FixtureQueue,
    history: MatchHistory,
}

impl Tournament {
    /// Starts a tournament with a randomized play order.
    pub fn new(roster: Roster) -> Self {
        Self::start(roster, None)
    }

    /// Starts a tournament with a reproducible play order.
    pub fn with_seed(roster: Roster, seed: u64) -> Self {
        Self::start(roster, Some(seed))
    }

    fn start(roster: Roster, seed: Option<u64>) -> Self {
        let (queue, table) = generate_fixtures(&roster, seed);
        info!(
            "tournament started: {} participants, {} fixtures",
            roster.len(),
            queue.len()
        );
        Self {
            roster,
            table,
            queue,
            history: MatchHistory::new(),
        }
    }

    /// The registered roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The live standings table.
    pub fn table(&self) -> &StandingsTable {
        &self.table
    }

    /// The next fixture to be played, or `None` once the round-robin is
    /// complete.
    pub fn current_fixture(&self) -> Option<&Fixture> {
        self.queue.peek()
    }

    /// Up to `count` upcoming fixtures, in play order.
    pub fn upcoming_fixtures(&self, count: usize) -> impl Iterator<Item = &Fixture> {
        self.queue.upcoming(count)
    }

    /// Fixtures not yet played.
    pub fn fixtures_remaining(&self) -> usize {
        self.queue.len()
    }

    /// Results applied and not undone.
    pub fn results_recorded(&self) -> usize {
        self.history.len()
    }

    /// True once every fixture has been played.
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// Standings rows sorted by points descending; equal points keep roster
    /// order.
    pub fn standings(&self) -> Vec<&TableRow> {
        self.table.sorted_rows()
    }

    /// Scores the current fixture with `(score_first, score_second)`.
    ///
    /// The front fixture is popped, both standings rows are updated, and the
    /// result is recorded for undo. On error nothing moves.
    ///
    /// # Errors
    /// [`Error::NoPendingFixture`] when every fixture has been played;
    /// [`Error::UnknownParticipant`] if the queue and table fell out of sync
    /// (a caller bug, not an expected condition).
    pub fn apply_result(&mut self, score_first: i32, score_second: i32) -> Result<MatchResult> {
        let fixture = *self.queue.peek().ok_or(Error::NoPendingFixture)?;
        let result = self.table.apply(fixture, score_first, score_second)?;
        self.queue.pop_front();
        self.history.push(result);

        debug!(
            "result recorded, {} fixtures left, history depth {}",
            self.queue.len(),
            self.history.len()
        );
        Ok(result)
    }

    /// Reverts the most recently applied result.
    ///
    /// Both standings rows return to their exact prior values and the
    /// fixture goes back to the front of the queue, immediately replayable.
    ///
    /// # Errors
    /// [`Error::EmptyHistory`] when nothing has been played; the session is
    /// unchanged.
    pub fn undo_last(&mut self) -> Result<MatchResult> {
        let result = self.history.pop()?;
        self.table.undo(&result)?;
        self.queue.push_front(result.fixture);

        debug!(
            "result reverted, {} fixtures left, history depth {}",
            self.queue.len(),
            self.history.len()
        );
        Ok(result)
    }
}
