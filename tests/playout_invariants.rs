//! Invariants checked after every sampled move of many seeded random games.

use rand::{rngs::StdRng, SeedableRng};

use wipeout_chess::utils::random_playout::{play_random_game, sample_attempt, PlayoutConfig, PlayoutEnd};
use wipeout_chess::{Color, GameState, Location, Outcome};

fn live_mask(game: &GameState, color: Color) -> u64 {
    game.registry(color)
        .pieces()
        .filter_map(|(_, record)| record.location.square())
        .fold(0u64, |acc, square| {
            assert_eq!(acc & square.mask(), 0, "two {color} pieces share {square}");
            acc | square.mask()
        })
}

fn assert_occupancy_invariant(game: &GameState) {
    let light = live_mask(game, Color::Light);
    let dark = live_mask(game, Color::Dark);
    assert_eq!(game.registry(Color::Light).occupancy(), light);
    assert_eq!(game.registry(Color::Dark).occupancy(), dark);
    assert_eq!(light & dark, 0, "a square is held by both sides");
}

fn move_counts(game: &GameState, color: Color) -> Vec<u32> {
    game.registry(color)
        .pieces()
        .map(|(_, record)| record.move_count)
        .collect()
}

#[test]
fn rejected_moves_change_nothing_and_accepted_moves_flip_turn() {
    for seed in 0..24u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new_game();

        for _ in 0..2_000 {
            let Some((from, to)) = sample_attempt(&mut rng, &game) else {
                break;
            };
            let before = game.clone();
            let mover = game.side_to_move();

            match game.try_move_squares(from, to) {
                Ok(report) => {
                    assert_eq!(game.side_to_move(), mover.opposite());
                    assert_eq!(report.mover, mover);
                    assert_eq!(game.piece_on(to).map(|(c, _)| c), Some(mover));
                    assert_eq!(game.piece_on(from), None);

                    let moved_total: u32 = move_counts(&game, mover).iter().sum();
                    let before_total: u32 = move_counts(&before, mover).iter().sum();
                    assert_eq!(moved_total, before_total + 1);
                    assert_eq!(
                        move_counts(&game, mover.opposite()),
                        move_counts(&before, mover.opposite()),
                        "captures never touch the victim's move count"
                    );
                }
                Err(_) => assert_eq!(game, before),
            }

            assert_occupancy_invariant(&game);
            if game.outcome().is_decided() {
                break;
            }
        }
    }
}

#[test]
fn decided_games_stay_decided() {
    let mut decided = 0;
    for seed in 0..40u64 {
        let result = play_random_game(&PlayoutConfig {
            seed,
            ..PlayoutConfig::default()
        });
        assert_occupancy_invariant(&result.final_state);

        let PlayoutEnd::Decided(outcome) = result.end else {
            continue;
        };
        decided += 1;
        assert_ne!(outcome, Outcome::Unfinished);

        let loser = match outcome {
            Outcome::LightWon => Color::Dark,
            Outcome::DarkWon => Color::Light,
            Outcome::Unfinished => unreachable!(),
        };
        assert!(result.final_state.registry(loser).any_kind_fully_captured());
        assert!(result.captures >= 1);

        let mut game = result.final_state.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..200 {
            if let Some((from, to)) = sample_attempt(&mut rng, &game) {
                assert!(game.try_move_squares(from, to).is_err());
            }
        }
        assert_eq!(game, result.final_state);
    }
    assert!(decided > 0, "no random game reached a decision");
}

#[test]
fn captured_pieces_stay_captured() {
    let result = play_random_game(&PlayoutConfig {
        seed: 11,
        ..PlayoutConfig::default()
    });
    for color in [Color::Light, Color::Dark] {
        let registry = result.final_state.registry(color);
        let captured = registry
            .pieces()
            .filter(|(_, record)| record.location == Location::Captured)
            .count();
        assert_eq!(captured + registry.live_count(), 16);
    }
}
