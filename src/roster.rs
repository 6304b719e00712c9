//! Participant registration.
//!
//! A [`Roster`] is the ordered list of participants entered before any fixture
//! is scheduled. Each participant receives a stable [`ParticipantId`] at
//! registration time, and every later lookup (standings rows, fixture
//! endpoints) is keyed by that id, never by display text, so two entries
//! sharing a name and team stay unambiguous.

use std::fmt;

use crate::error::{Error, Result};

/// Stable opaque identifier assigned to a participant at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(pub(crate) u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Identifier keying this participant in every table and fixture.
    pub id: ParticipantId,
    /// Display name, free-form.
    pub name: String,
    /// Team name, free-form.
    pub team: String,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

/// Ordered list of participants, fixed for the whole tournament.
#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Registers participants from `(name, team)` pairs, in entry order.
    ///
    /// Names and teams are free-form text and duplicates are permitted; ids
    /// are assigned sequentially and carry the identity from here on.
    ///
    /// # Errors
    /// [`Error::InvalidRosterSize`] when fewer than two participants are
    /// given; a one-participant league has nothing to schedule.
    pub fn new<N, T>(entries: Vec<(N, T)>) -> Result<Self>
    where
        N: Into<String>,
        T: Into<String>,
    {
        if entries.len() < 2 {
            return Err(Error::InvalidRosterSize(entries.len()));
        }
        let participants = entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, team))| Participant {
                id: ParticipantId(i as u32),
                name: name.into(),
                team: team.into(),
            })
            .collect();
        Ok(Self { participants })
    }

    /// Number of registered participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false: a roster cannot be built with fewer than two entries.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterates participants in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Looks up a participant by id.
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}
