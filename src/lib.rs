//! # League Tournament
//!
//! A Rust crate for running single round-robin leagues: every participant
//! plays every other participant exactly once, a live standings table tracks
//! results as they are entered, and the most recent result can always be
//! undone with the table restored exactly.
//!
//! It provides:
//! - Roster registration with stable participant identifiers ([`Roster`](roster::Roster))
//! - Complete-schedule fixture generation with a randomized, optionally
//!   seeded play order ([`generate_fixtures`](fixtures::generate_fixtures))
//! - A reversible standings ledger: three points a win, one a draw, plus
//!   goal difference ([`StandingsTable`](standings::StandingsTable))
//! - Score-string parsing for `"2x1"` / `"2 1"` input
//!   ([`parse_score`](score_parser::parse_score))
//! - A session value threading all state through the caller
//!   ([`Tournament`](tournament::Tournament))
//!
//! The engine is synchronous and keeps no state of its own: everything lives
//! in the [`Tournament`](tournament::Tournament) value the caller owns, so a
//! front-end resets a league simply by dropping it.
//!
//! # Documentation Overview
//!
//! - For the apply/undo scoring algorithm, see the [`standings`] module.
//! - For fixture generation and the play-order queue, see [`fixtures`].
//! - For the accepted score text formats, see [`score_parser`].
//! - For configuring a front-end session (preview size, seed, logging), see
//!   [`Configuration`](configuration::Configuration).
//!
//! # Usage Example
//!
//! ```rust
//! use league_tournament::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let roster = Roster::new(vec![
//!         ("Alice", "Reds"),
//!         ("Bruno", "Blues"),
//!         ("Carla", "Greens"),
//!     ])?;
//!
//!     // seeded for a reproducible play order; use `Tournament::new` otherwise
//!     let mut tournament = Tournament::with_seed(roster, 42);
//!
//!     while !tournament.is_complete() {
//!         let (score_first, score_second) = parse_score("2x1")?;
//!         tournament.apply_result(score_first, score_second)?;
//!     }
//!
//!     // entered the last one wrong? take it back and replay it
//!     tournament.undo_last()?;
//!     tournament.apply_result(1, 1)?;
//!
//!     for row in tournament.standings() {
//!         println!("{}: {}", row.participant, row.line);
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;

pub mod configuration;
pub mod error;
pub mod fixtures;
pub mod logger;
pub mod match_history;
pub mod roster;
pub mod score_parser;
pub mod standings;
pub mod tournament;

/// Commonly used types and functions for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use league_tournament::prelude::*;
/// ```
///
/// Includes:
/// - [`Roster`](crate::roster::Roster) and [`Tournament`](crate::tournament::Tournament)
/// - [`parse_score`](crate::score_parser::parse_score)
/// - [`Configuration`](crate::configuration::Configuration)
/// - the [`Error`](crate::error::Error) type and its [`Result`](crate::error::Result) alias
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::error::{Error, Result};
    pub use crate::fixtures::{generate_fixtures, Fixture, FixtureQueue};
    pub use crate::match_history::{MatchHistory, MatchResult};
    pub use crate::roster::{Participant, ParticipantId, Roster};
    pub use crate::score_parser::parse_score;
    pub use crate::standings::{ScoreLine, StandingsTable, TableRow};
    pub use crate::tournament::Tournament;
}
