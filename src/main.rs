//! Interactive terminal front-end for running a league.
//!
//! All scheduling and scoring logic lives in the library; this binary only
//! prompts, parses, and renders what the engine returns.

use std::io::{self, BufRead, Write};

use league_tournament::logger;
use league_tournament::prelude::*;

enum SessionEnd {
    Reset,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let config = Configuration::from_env();
    if config.log() {
        logger::init_logger();
    }

    println!("league: single round-robin tournament");
    println!("commands during play: a score like 2x1 (or 2 1), undo, reset, quit");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(roster) = prompt_roster(&mut input)? else {
            break;
        };
        let mut tournament = match config.seed() {
            Some(seed) => Tournament::with_seed(roster, seed),
            None => Tournament::new(roster),
        };

        match run_session(&mut tournament, &mut input, &config)? {
            SessionEnd::Reset => {
                println!("League reset.");
                println!();
            }
            SessionEnd::Quit => break,
        }
    }
    Ok(())
}

/// Asks for the participant count and the (name, team) pairs.
///
/// Returns `None` on end of input.
fn prompt_roster(input: &mut impl BufRead) -> anyhow::Result<Option<Roster>> {
    let count = loop {
        let Some(line) = read_line(input, "How many players? ")? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(n) if n >= 2 => break n,
            Ok(_) => println!("A league needs at least two players."),
            Err(_) => println!("Not a number: {line:?}"),
        }
    };

    let mut entries = Vec::with_capacity(count);
    for i in 1..=count {
        let Some(name) = read_line(input, &format!("Name of player {i}? "))? else {
            return Ok(None);
        };
        let Some(team) = read_line(input, &format!("Team of {}? ", name.trim()))? else {
            return Ok(None);
        };
        entries.push((name.trim().to_string(), team.trim().to_string()));
    }

    Ok(Some(Roster::new(entries)?))
}

/// Runs one tournament to reset, quit, or end of input.
fn run_session(
    tournament: &mut Tournament,
    input: &mut impl BufRead,
    config: &Configuration,
) -> anyhow::Result<SessionEnd> {
    print_state(tournament, config);

    loop {
        let prompt = if tournament.is_complete() {
            "undo, reset or quit? "
        } else {
            "Score (e.g. 2x1), undo, reset or quit? "
        };
        let Some(line) = read_line(input, prompt)? else {
            return Ok(SessionEnd::Quit);
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(SessionEnd::Quit),
            "reset" => return Ok(SessionEnd::Reset),
            "undo" => match tournament.undo_last() {
                Ok(undone) => {
                    println!(
                        "Reverted {}; it is up again next.",
                        describe_result(tournament.roster(), &undone)
                    );
                    print_state(tournament, config);
                }
                Err(err) => println!("{err}"),
            },
            text => match enter_score(tournament, text) {
                Ok(result) => {
                    println!(
                        "Recorded {}.",
                        describe_result(tournament.roster(), &result)
                    );
                    if tournament.is_complete() {
                        println!("Round-robin complete: every pairing has been played.");
                    }
                    print_state(tournament, config);
                }
                Err(err) if err.is_recoverable() => println!("{err}"),
                Err(err) => return Err(err.into()),
            },
        }
    }
}

fn enter_score(tournament: &mut Tournament, text: &str) -> Result<MatchResult> {
    let (score_first, score_second) = parse_score(text)?;
    tournament.apply_result(score_first, score_second)
}

fn print_state(tournament: &Tournament, config: &Configuration) {
    if !config.verbose() {
        return;
    }

    println!();
    print!("{}", render_table(tournament));
    println!();

    if let Some(fixture) = tournament.current_fixture() {
        let upcoming: Vec<String> = tournament
            .upcoming_fixtures(config.preview_count())
            .map(|f| describe_fixture(tournament.roster(), f))
            .collect();
        println!("Next up: {}", upcoming.join(", "));
        println!(
            "Now playing: {}",
            describe_fixture(tournament.roster(), fixture)
        );
    } else {
        println!("All fixtures played.");
    }
}

fn render_table(tournament: &Tournament) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<28} {:>3} {:>4} {:>3} {:>3} {:>3} {:>4}\n",
        "Player", "P", "GD", "W", "D", "L", "Pts"
    ));
    out.push_str(&"-".repeat(56));
    out.push('\n');

    for row in tournament.standings() {
        let line = row.line;
        out.push_str(&format!(
            "{:<28} {:>3} {:>4} {:>3} {:>3} {:>3} {:>4}\n",
            row.participant.to_string(),
            line.matches_played,
            line.goal_difference,
            line.wins,
            line.draws,
            line.losses,
            line.points
        ));
    }
    out
}

fn describe_fixture(roster: &Roster, fixture: &Fixture) -> String {
    format!(
        "{} vs {}",
        describe_side(roster, fixture.first),
        describe_side(roster, fixture.second)
    )
}

fn describe_result(roster: &Roster, result: &MatchResult) -> String {
    format!(
        "{} {}x{} {}",
        describe_side(roster, result.fixture.first),
        result.score_first,
        result.score_second,
        describe_side(roster, result.fixture.second)
    )
}

fn describe_side(roster: &Roster, id: ParticipantId) -> String {
    roster
        .get(id)
        .map(|p| p.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Prints `prompt`, then reads one line. `None` means end of input.
fn read_line(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
