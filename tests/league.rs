//! End-to-end flows driven through the public API only.

use league_tournament::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn init_test_logger() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(true)
        .without_time()
        .finish();
    // another test may already have installed one
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn three_player_roster() -> Roster {
    Roster::new(vec![("A", "Reds"), ("B", "Blues"), ("C", "Greens")]).unwrap()
}

fn zeroed(line: &ScoreLine) -> bool {
    *line == ScoreLine::default()
}

#[test]
fn three_player_scenario_with_undo() {
    init_test_logger();

    let mut tournament = Tournament::with_seed(three_player_roster(), 3);
    assert_eq!(tournament.fixtures_remaining(), 3);

    // whichever pairing came up first, score it 2x1
    let fixture = *tournament.current_fixture().unwrap();
    let (s1, s2) = parse_score("2x1").unwrap();
    tournament.apply_result(s1, s2).unwrap();

    let winner = tournament.table().get(fixture.first).unwrap().line;
    assert_eq!(winner.matches_played, 1);
    assert_eq!(winner.wins, 1);
    assert_eq!(winner.points, 3);
    assert_eq!(winner.goal_difference, 1);

    let loser = tournament.table().get(fixture.second).unwrap().line;
    assert_eq!(loser.matches_played, 1);
    assert_eq!(loser.losses, 1);
    assert_eq!(loser.points, 0);
    assert_eq!(loser.goal_difference, -1);

    assert_eq!(tournament.fixtures_remaining(), 2);
    assert_eq!(tournament.results_recorded(), 1);

    // undo puts the fixture back in front with both rows zeroed again
    tournament.undo_last().unwrap();
    assert_eq!(tournament.fixtures_remaining(), 3);
    assert_eq!(tournament.results_recorded(), 0);
    assert_eq!(tournament.current_fixture(), Some(&fixture));
    assert!(tournament.table().rows().all(|row| zeroed(&row.line)));
}

#[test]
fn draw_scenario() {
    let mut tournament = Tournament::with_seed(three_player_roster(), 5);
    let fixture = *tournament.current_fixture().unwrap();

    let (s1, s2) = parse_score("1 1").unwrap();
    tournament.apply_result(s1, s2).unwrap();

    for id in [fixture.first, fixture.second] {
        let line = tournament.table().get(id).unwrap().line;
        assert_eq!(line.matches_played, 1);
        assert_eq!(line.draws, 1);
        assert_eq!(line.points, 1);
        assert_eq!(line.goal_difference, 0);
    }
}

#[test]
fn undo_with_nothing_played_is_reported_not_fatal() {
    let mut tournament = Tournament::with_seed(three_player_roster(), 1);
    let before: Vec<_> = tournament.upcoming_fixtures(usize::MAX).copied().collect();

    let err = tournament.undo_last().unwrap_err();
    assert_eq!(err, Error::EmptyHistory);
    assert!(err.is_recoverable());

    let after: Vec<_> = tournament.upcoming_fixtures(usize::MAX).copied().collect();
    assert_eq!(before, after);
    assert!(tournament.table().rows().all(|row| zeroed(&row.line)));
}

#[test]
fn full_round_accounting_stays_consistent() {
    let mut tournament = Tournament::with_seed(three_player_roster(), 8);

    let scores = [(2, 1), (0, 0), (1, 4)];
    for (s1, s2) in scores {
        tournament.apply_result(s1, s2).unwrap();
    }
    assert!(tournament.is_complete());

    let mut total_points = 0;
    let mut total_played = 0;
    for row in tournament.table().rows() {
        let line = row.line;
        assert_eq!(line.matches_played, line.wins + line.draws + line.losses);
        assert_eq!(line.points, 3 * line.wins + line.draws);
        total_points += line.points;
        total_played += line.matches_played;
    }
    // three matches: one drawn (2 points), two decisive (3 points each)
    assert_eq!(total_points, 8);
    assert_eq!(total_played, 6);

    // goal differences cancel out across the table
    let gd_sum: i32 = tournament.table().rows().map(|r| r.line.goal_difference).sum();
    assert_eq!(gd_sum, 0);
}

#[test]
fn standings_order_points_descending_with_stable_ties() {
    let roster = Roster::new(vec![
        ("A", "Reds"),
        ("B", "Blues"),
        ("C", "Greens"),
        ("D", "Golds"),
    ])
    .unwrap();
    let mut tournament = Tournament::with_seed(roster, 4);

    // every match drawn: all tied on the same points, roster order preserved
    while !tournament.is_complete() {
        tournament.apply_result(0, 0).unwrap();
    }

    let names: Vec<_> = tournament
        .standings()
        .iter()
        .map(|row| row.participant.name.clone())
        .collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
}

#[test]
fn seeded_schedules_are_reproducible() {
    let order = |seed| {
        let tournament = Tournament::with_seed(three_player_roster(), seed);
        tournament
            .upcoming_fixtures(usize::MAX)
            .copied()
            .collect::<Vec<_>>()
    };
    assert_eq!(order(21), order(21));
}

#[test]
fn replaying_an_undone_fixture_with_a_new_score() {
    let mut tournament = Tournament::with_seed(three_player_roster(), 2);
    let fixture = *tournament.current_fixture().unwrap();

    tournament.apply_result(3, 0).unwrap();
    tournament.undo_last().unwrap();

    // typo corrected: same fixture, different score
    let replayed = tournament.apply_result(0, 3).unwrap();
    assert_eq!(replayed.fixture, fixture);
    assert_eq!(tournament.table().get(fixture.second).unwrap().line.wins, 1);
    assert_eq!(tournament.table().get(fixture.first).unwrap().line.losses, 1);
}
