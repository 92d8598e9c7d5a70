//! Seeded random playout harness.
//!
//! Drives a game by throwing random (source, destination) pairs at
//! `GameState::try_move` until one sticks, ply after ply. This is a fuzz
//! driver for invariant tests and benchmarks, not a move chooser: it never
//! enumerates legal moves, it only samples and lets the controller reject.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::game_state::chess_types::*;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u32,
    pub max_attempts_per_ply: u32,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            max_attempts_per_ply: 4096,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    Decided(Outcome),
    MaxPlies,
    /// No sampled move was accepted within `max_attempts_per_ply`.
    Stalled,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub end: PlayoutEnd,
    pub final_state: GameState,
    pub plies: u32,
    pub captures: u32,
    pub rejected_attempts: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl PlayoutResult {
    pub fn report(&self) -> String {
        format!(
            "started={} end={:?} plies={} captures={} rejected={} elapsed_ms={:.3}",
            self.started_at.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.end,
            self.plies,
            self.captures,
            self.rejected_attempts,
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

/// Random (source, destination) pair whose source holds a piece of the side
/// to move. `None` when that side has no pieces left.
pub fn sample_attempt<R: Rng>(rng: &mut R, state: &GameState) -> Option<(Square, Square)> {
    let sources: Vec<Square> = state
        .registry(state.side_to_move())
        .occupied_squares()
        .collect();
    let from = *sources.choose(rng)?;
    let to = Square::from_index(rng.random_range(0..64u8));
    Some((from, to))
}

/// Random playout from the standard starting position.
pub fn play_random_game(config: &PlayoutConfig) -> PlayoutResult {
    play_random_game_from_state(GameState::new_game(), config)
}

pub fn play_random_game_from_state(start: GameState, config: &PlayoutConfig) -> PlayoutResult {
    let started_at = Utc::now();
    let clock = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut state = start;
    let mut plies = 0u32;
    let mut captures = 0u32;
    let mut rejected_attempts = 0u64;

    let end = loop {
        if state.outcome().is_decided() {
            break PlayoutEnd::Decided(state.outcome());
        }
        if plies >= config.max_plies {
            break PlayoutEnd::MaxPlies;
        }

        let mut accepted = false;
        for _ in 0..config.max_attempts_per_ply {
            let Some((from, to)) = sample_attempt(&mut rng, &state) else {
                break;
            };
            match state.try_move_squares(from, to) {
                Ok(report) => {
                    if report.captured.is_some() {
                        captures += 1;
                    }
                    accepted = true;
                    break;
                }
                Err(_) => rejected_attempts += 1,
            }
        }

        if !accepted {
            break PlayoutEnd::Stalled;
        }
        plies += 1;
    };

    PlayoutResult {
        end,
        final_state: state,
        plies,
        captures,
        rejected_attempts,
        started_at,
        elapsed: clock.elapsed(),
    }
}
