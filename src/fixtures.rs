//! Fixture generation and the play-order queue.
//!
//! [`generate_fixtures`] enumerates every unordered pairing of the roster
//! exactly once (`n * (n - 1) / 2` fixtures for `n` participants), then
//! shuffles the play order and hands back the queue together with a freshly
//! zeroed standings table. The shuffle only permutes the order: pairing
//! membership is identical under every seed.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::roster::{ParticipantId, Roster};
use crate::standings::StandingsTable;

/// One scheduled, not-yet-played pairing of two participants.
///
/// The pair is unordered as far as scheduling goes; `first`/`second` only
/// fix which side each entered score maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixture {
    /// Side the first entered score belongs to.
    pub first: ParticipantId,
    /// Side the second entered score belongs to.
    pub second: ParticipantId,
}

/// Ordered sequence of fixtures, consumed from the front.
#[derive(Debug, Clone, Default)]
pub struct FixtureQueue {
    fixtures: VecDeque<Fixture>,
}

impl FixtureQueue {
    /// The next fixture to be played, if any remain.
    pub fn peek(&self) -> Option<&Fixture> {
        self.fixtures.front()
    }

    /// Up to `count` upcoming fixtures, in play order.
    pub fn upcoming(&self, count: usize) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().take(count)
    }

    /// Remaining fixture count.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// True once every fixture has been consumed: the round-robin is
    /// complete.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub(crate) fn pop_front(&mut self) -> Option<Fixture> {
        self.fixtures.pop_front()
    }

    /// Undo path: the undone fixture returns to the front so it is
    /// immediately replayable.
    pub(crate) fn push_front(&mut self, fixture: Fixture) {
        self.fixtures.push_front(fixture);
    }
}

/// Generates the complete single round-robin schedule for `roster`.
///
/// Pairs are enumerated as `(i, j)` with `i < j` over roster order, so every
/// unordered pair of distinct participants occurs exactly once, then the
/// sequence is uniformly shuffled. Pass a seed to make the play order
/// reproducible.
///
/// Also returns the zeroed [`StandingsTable`] the fixtures will be scored
/// into, keyed by the same participant ids.
pub fn generate_fixtures(roster: &Roster, seed: Option<u64>) -> (FixtureQueue, StandingsTable) {
    let ids: Vec<ParticipantId> = roster.iter().map(|p| p.id).collect();
    let n = ids.len();

    let mut fixtures = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            fixtures.push(Fixture {
                first: ids[i],
                second: ids[j],
            });
        }
    }

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    fixtures.shuffle(&mut rng);

    info!("scheduled {} fixtures for {n} participants", fixtures.len());

    let queue = FixtureQueue {
        fixtures: fixtures.into(),
    };
    (queue, StandingsTable::zeroed(roster))
}
