//! End-to-end rule scenarios through the public `GameState` surface.

use wipeout_chess::{ChessErrors, Color, GameState, Outcome, PieceKind, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("test square should parse")
}

fn play(game: &mut GameState, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        if let Err(e) = game.try_move(from, to) {
            panic!("{from}{to} should be legal: {e}");
        }
    }
}

#[test]
fn opening_scenario() {
    let mut game = GameState::new_game();
    assert_eq!(game.outcome(), Outcome::Unfinished);

    assert!(game.attempt_move("e2", "e4"));
    assert_eq!(game.side_to_move(), Color::Dark);

    // e4 belongs to light, and it is dark's turn.
    assert!(!game.attempt_move("e4", "e5"));
    assert!(!game.attempt_move("a2", "a2"));
    assert_eq!(game.side_to_move(), Color::Dark);
}

#[test]
fn self_capture_leaves_state_unchanged() {
    let mut game = GameState::new_game();
    let before = game.clone();
    assert!(!game.attempt_move("a1", "a2"));
    assert_eq!(game, before);
}

#[test]
fn knight_ignores_surrounding_pieces() {
    let mut game = GameState::new_game();
    assert!(game.attempt_move("b1", "c3"));
    assert_eq!(game.piece_on(sq("c3")), Some((Color::Light, PieceKind::Knight)));
}

#[test]
fn king_is_not_a_sliding_piece_but_cannot_leap() {
    let mut game = GameState::new_game();
    assert!(!game.attempt_move("e1", "e3"));
    play(&mut game, &[("e2", "e4"), ("a7", "a6")]);
    assert!(game.attempt_move("e1", "e2"));
}

#[test]
fn blocked_rook_becomes_legal_once_blocker_is_gone() {
    let blocked = "4k3/8/8/8/8/8/P7/R3K3";
    let open = "4k3/8/8/8/8/8/8/R3K3";

    let mut game = GameState::from_placement(blocked, Color::Light).expect("fixture should parse");
    assert_eq!(
        game.try_move("a1", "a4"),
        Err(ChessErrors::PathBlocked { blocker: sq("a2") })
    );

    let mut game = GameState::from_placement(open, Color::Light).expect("fixture should parse");
    assert!(game.attempt_move("a1", "a4"));
}

#[test]
fn opponent_pieces_block_too() {
    let blocked = "4k3/8/8/8/p7/8/8/Q3K3";
    let open = "4k3/8/8/8/8/8/8/Q3K3";

    let mut game = GameState::from_placement(blocked, Color::Light).expect("fixture should parse");
    assert_eq!(
        game.try_move("a1", "a6"),
        Err(ChessErrors::PathBlocked { blocker: sq("a4") })
    );

    let mut game = GameState::from_placement(open, Color::Light).expect("fixture should parse");
    assert!(game.attempt_move("a1", "a6"));
}

#[test]
fn bishop_blocked_by_opponent_on_diagonal() {
    let blocked = "4k3/8/8/8/3p4/8/8/B3K3";
    let open = "4k3/8/8/8/8/8/8/B3K3";

    let mut game = GameState::from_placement(blocked, Color::Light).expect("fixture should parse");
    assert_eq!(
        game.try_move("a1", "g7"),
        Err(ChessErrors::PathBlocked { blocker: sq("d4") })
    );
    let mut game = GameState::from_placement(open, Color::Light).expect("fixture should parse");
    assert!(game.attempt_move("a1", "g7"));
}

#[test]
fn pawn_double_step_only_on_first_move() {
    let mut game = GameState::new_game();
    play(&mut game, &[("e2", "e3"), ("a7", "a6")]);
    assert!(matches!(
        game.try_move("e3", "e5"),
        Err(ChessErrors::IllegalGeometry {
            kind: PieceKind::Pawn,
            ..
        })
    ));
    assert!(game.attempt_move("e3", "e4"));
}

#[test]
fn pawn_cannot_capture_with_double_step() {
    let mut game =
        GameState::from_placement("4k3/8/8/8/4p3/8/4P3/4K3", Color::Light).expect("fixture should parse");
    assert!(!game.attempt_move("e2", "e4"));
    assert!(game.attempt_move("e2", "e3"));
}

#[test]
fn pawn_never_moves_backwards() {
    let mut game = GameState::new_game();
    play(&mut game, &[("d2", "d4"), ("d7", "d5")]);
    assert!(!game.attempt_move("d4", "d3"));
    play(&mut game, &[("c2", "c3")]);
    assert!(!game.attempt_move("d5", "d6"));
}

#[test]
fn one_of_two_bishops_then_the_other() {
    let fixture = "rnbqk3/p7/8/1b6/8/8/P7/RNBQKB2";
    let mut game = GameState::from_placement(fixture, Color::Light).expect("fixture should parse");

    let first = game.try_move("f1", "b5").expect("bishop takes bishop");
    assert_eq!(first.captured, Some(PieceKind::Bishop));
    assert_eq!(game.outcome(), Outcome::Unfinished);

    play(&mut game, &[("c8", "d7")]);
    let second = game.try_move("b5", "d7").expect("bishop takes last bishop");
    assert_eq!(second.outcome, Outcome::LightWon);
    assert_eq!(game.outcome(), Outcome::LightWon);
}

#[test]
fn dark_wins_by_taking_the_king() {
    let fixture = "rnbqkbnr/pppppppp/8/8/8/8/PPPqPPPP/RNBQKBNR";
    let mut game = GameState::from_placement(fixture, Color::Dark).expect("fixture should parse");

    let report = game.try_move("d2", "e1").expect("queen takes king");
    assert_eq!(report.captured, Some(PieceKind::King));
    assert_eq!(game.outcome(), Outcome::DarkWon);
    assert_eq!(game.side_to_move(), Color::Light);

    let before = game.clone();
    for (from, to) in [("a2", "a3"), ("b1", "c3"), ("d1", "d2")] {
        assert!(!game.attempt_move(from, to));
    }
    assert_eq!(game, before);
}

#[test]
fn full_game_ends_on_lost_queen() {
    let mut game = GameState::new_game();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("d7", "d5"),
            ("e4", "d5"),
            ("d8", "d5"),
            ("b1", "c3"),
        ],
    );
    assert_eq!(game.outcome(), Outcome::Unfinished);

    // Dark blunders the queen along the d-file.
    play(&mut game, &[("d5", "d4"), ("g1", "f3"), ("h7", "h6")]);
    let report = game.try_move("f3", "d4").expect("knight takes queen");
    assert_eq!(report.captured, Some(PieceKind::Queen));
    assert_eq!(game.outcome(), Outcome::LightWon);
}
