//! Live standings table and the reversible scoring ledger.
//!
//! The table holds exactly one row per roster participant, created zeroed
//! when fixtures are generated and never added to or removed from afterwards.
//! [`StandingsTable::apply`] scores one match and returns the
//! [`MatchResult`] to record; [`StandingsTable::undo`] recomputes the same
//! per-side deltas from the recorded scores and subtracts them, restoring
//! every field to its pre-apply value. Both directions share one outcome
//! function, so the inverse is exact for any integer scores.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::fixtures::Fixture;
use crate::match_history::MatchResult;
use crate::roster::{Participant, ParticipantId, Roster};

/// Cumulative statistics for one participant.
///
/// The ledger maintains `matches_played == wins + draws + losses` and
/// `points == 3 * wins + draws` at all times.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine {
    /// Matches played so far.
    pub matches_played: u32,
    /// Matches won.
    pub wins: u32,
    /// Matches drawn.
    pub draws: u32,
    /// Matches lost.
    pub losses: u32,
    /// Goals scored minus goals conceded, cumulative.
    pub goal_difference: i32,
    /// Three per win, one per draw.
    pub points: u32,
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "played: {}, w/d/l: {}/{}/{}, gd: {}, points: {}",
            self.matches_played, self.wins, self.draws, self.losses, self.goal_difference, self.points
        )
    }
}

impl ScoreLine {
    fn credit(&mut self, outcome: &Outcome) {
        self.matches_played += 1;
        self.wins += outcome.wins;
        self.draws += outcome.draws;
        self.losses += outcome.losses;
        self.goal_difference += outcome.goal_difference;
        self.points += outcome.points;
    }

    fn debit(&mut self, outcome: &Outcome) {
        self.matches_played -= 1;
        self.wins -= outcome.wins;
        self.draws -= outcome.draws;
        self.losses -= outcome.losses;
        self.goal_difference -= outcome.goal_difference;
        self.points -= outcome.points;
    }
}

/// Per-side stat deltas of one played match. Apply credits them, undo debits
/// the identical recomputation.
#[derive(Debug, Clone, Copy)]
struct Outcome {
    wins: u32,
    draws: u32,
    losses: u32,
    goal_difference: i32,
    points: u32,
}

impl Outcome {
    fn win(goal_difference: i32) -> Self {
        Self {
            wins: 1,
            draws: 0,
            losses: 0,
            goal_difference,
            points: 3,
        }
    }

    fn loss(goal_difference: i32) -> Self {
        Self {
            wins: 0,
            draws: 0,
            losses: 1,
            goal_difference,
            points: 0,
        }
    }

    fn draw() -> Self {
        Self {
            wins: 0,
            draws: 1,
            losses: 0,
            goal_difference: 0,
            points: 1,
        }
    }
}

/// Deltas for both sides of a `(score_first, score_second)` result.
fn score_outcomes(score_first: i32, score_second: i32) -> (Outcome, Outcome) {
    let diff = score_first - score_second;
    match score_first.cmp(&score_second) {
        Ordering::Greater => (Outcome::win(diff), Outcome::loss(-diff)),
        Ordering::Less => (Outcome::loss(diff), Outcome::win(-diff)),
        Ordering::Equal => (Outcome::draw(), Outcome::draw()),
    }
}

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Who the row belongs to.
    pub participant: Participant,
    /// The cumulative statistics line.
    pub line: ScoreLine,
}

/// The live scoreboard: one row per participant, keyed by id.
///
/// Rows are stored in roster order, which is what keeps equal-points ranking
/// stable (see [`StandingsTable::sorted_rows`]).
#[derive(Debug, Clone)]
pub struct StandingsTable {
    rows: Vec<TableRow>,
    index: HashMap<ParticipantId, usize>,
}

impl StandingsTable {
    /// Builds a zeroed table with one row per roster participant.
    pub(crate) fn zeroed(roster: &Roster) -> Self {
        let rows: Vec<TableRow> = roster
            .iter()
            .map(|participant| TableRow {
                participant: participant.clone(),
                line: ScoreLine::default(),
            })
            .collect();
        let index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.participant.id, i))
            .collect();
        Self { rows, index }
    }

    /// Number of rows; equals the roster size for the whole tournament.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True only for a table that was never populated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up one row by participant id.
    pub fn get(&self, id: ParticipantId) -> Option<&TableRow> {
        self.index.get(&id).map(|&i| &self.rows[i])
    }

    /// Rows in roster order.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }

    /// Rows sorted by points descending.
    ///
    /// Equal points keep roster order: the sort is stable and no secondary
    /// key is applied.
    pub fn sorted_rows(&self) -> Vec<&TableRow> {
        let mut rows: Vec<&TableRow> = self.rows.iter().collect();
        rows.sort_by_key(|row| Reverse(row.line.points));
        rows
    }

    /// Scores one match: credits both sides of `fixture` with the deltas of
    /// `(score_first, score_second)` and returns the [`MatchResult`] the
    /// caller should push onto its history.
    ///
    /// Both rows are resolved before either is written, so a failed lookup
    /// leaves the table untouched.
    ///
    /// # Errors
    /// [`Error::UnknownParticipant`] when a fixture endpoint has no row;
    /// possible only if queue and table fell out of sync.
    pub fn apply(&mut self, fixture: Fixture, score_first: i32, score_second: i32) -> Result<MatchResult> {
        let (first, second) = self.row_pair(fixture)?;

        let (outcome_first, outcome_second) = score_outcomes(score_first, score_second);
        self.rows[first].line.credit(&outcome_first);
        self.rows[second].line.credit(&outcome_second);

        debug!(
            "applied {} {score_first}x{score_second} {}",
            fixture.first, fixture.second
        );
        Ok(MatchResult {
            fixture,
            score_first,
            score_second,
        })
    }

    /// Reverts one previously applied result.
    ///
    /// Recomputes the deltas [`apply`](Self::apply) credited (same branch on
    /// the same stored scores) and subtracts them field by field. Applying
    /// then undoing the same result returns every row to its prior value,
    /// for any integer scores.
    ///
    /// # Errors
    /// [`Error::UnknownParticipant`] under the same conditions as apply; the
    /// table is untouched on failure.
    pub fn undo(&mut self, result: &MatchResult) -> Result<()> {
        let (first, second) = self.row_pair(result.fixture)?;

        let (outcome_first, outcome_second) = score_outcomes(result.score_first, result.score_second);
        self.rows[first].line.debit(&outcome_first);
        self.rows[second].line.debit(&outcome_second);

        debug!(
            "reverted {} {}x{} {}",
            result.fixture.first, result.score_first, result.score_second, result.fixture.second
        );
        Ok(())
    }

    fn row_pair(&self, fixture: Fixture) -> Result<(usize, usize)> {
        let first = self.row_index(fixture.first)?;
        let second = self.row_index(fixture.second)?;
        Ok((first, second))
    }

    fn row_index(&self, id: ParticipantId) -> Result<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(Error::UnknownParticipant(id))
    }
}
