//! Game controller.
//!
//! `GameState` owns both side registries, the side to move and the outcome.
//! [`GameState::try_move`] is the only mutator. It runs every legality check
//! first and only then touches the registries, so a rejected move leaves the
//! state exactly as it was.

use log::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::move_rules::{is_geometric_move, is_sliding, move_path};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::placement_parser::parse_placement;

/// Summary of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Color,
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    /// Outcome after the move; decided only when the move won the game.
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    registries: [SideRegistry; 2],
    side_to_move: Color,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Both sides on their standard squares, light to move.
    pub fn new_game() -> Self {
        Self {
            registries: [
                SideRegistry::new(Color::Light),
                SideRegistry::new(Color::Dark),
            ],
            side_to_move: Color::Light,
            outcome: Outcome::Unfinished,
        }
    }

    /// Position from a FEN piece-placement field, outcome unfinished.
    pub fn from_placement(placement: &str, side_to_move: Color) -> Result<Self, ChessErrors> {
        let [light, dark] = parse_placement(placement)?;
        Ok(Self {
            registries: [
                SideRegistry::from_placements(Color::Light, light)?,
                SideRegistry::from_placements(Color::Dark, dark)?,
            ],
            side_to_move,
            outcome: Outcome::Unfinished,
        })
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn registry(&self, color: Color) -> &SideRegistry {
        &self.registries[color.index()]
    }

    /// Color and kind of the live piece on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.registries.iter().find_map(|registry| {
            registry
                .piece_at(square)
                .map(|id| (registry.color(), registry.kind_of(id)))
        })
    }

    /// Applies the move if legal and reports whether it was applied.
    /// Malformed coordinates count as illegal moves.
    pub fn attempt_move(&mut self, source: &str, destination: &str) -> bool {
        self.try_move(source, destination).is_ok()
    }

    /// Like [`GameState::attempt_move`] but says why a move was rejected.
    pub fn try_move(&mut self, source: &str, destination: &str) -> Result<MoveReport, ChessErrors> {
        let from = algebraic_to_square(source).inspect_err(|e| debug!("rejected {source}: {e}"))?;
        let to =
            algebraic_to_square(destination).inspect_err(|e| debug!("rejected {destination}: {e}"))?;
        self.try_move_squares(from, to)
    }

    pub fn try_move_squares(&mut self, from: Square, to: Square) -> Result<MoveReport, ChessErrors> {
        let check = self.check_move(from, to);
        match check {
            Ok((piece, captured)) => self.apply_checked_move(from, to, piece, captured),
            Err(e) => {
                debug!("rejected {} {from}{to}: {e}", self.side_to_move);
                Err(e)
            }
        }
    }

    /// Every legality check, without mutation. Returns the moving kind and
    /// the kind about to be captured.
    fn check_move(
        &self,
        from: Square,
        to: Square,
    ) -> Result<(PieceKind, Option<PieceKind>), ChessErrors> {
        if self.outcome.is_decided() {
            return Err(ChessErrors::GameAlreadyDecided(self.outcome));
        }

        let side = self.side_to_move;
        let mover = self.registry(side);
        let opponent = self.registry(side.opposite());

        let id = mover
            .piece_at(from)
            .ok_or(ChessErrors::NoPieceOfSideToMove { square: from, side })?;
        let kind = mover.kind_of(id);

        let legal = match is_geometric_move(kind, from, to) {
            Some(legal) => legal,
            None => mover.pawn_move_legal(id, opponent, from, to),
        };
        if !legal {
            return Err(ChessErrors::IllegalGeometry { kind, from, to });
        }

        if is_sliding(kind) {
            let blocker = move_path(kind, from, to)
                .into_iter()
                .find(|sq| mover.occupies(*sq) || opponent.occupies(*sq));
            if let Some(blocker) = blocker {
                return Err(ChessErrors::PathBlocked { blocker });
            }
        }

        if mover.occupies(to) {
            return Err(ChessErrors::SelfCapture(to));
        }

        let captured = opponent.piece_at(to).map(|id| opponent.kind_of(id));
        Ok((kind, captured))
    }

    fn apply_checked_move(
        &mut self,
        from: Square,
        to: Square,
        piece: PieceKind,
        captured: Option<PieceKind>,
    ) -> Result<MoveReport, ChessErrors> {
        let side = self.side_to_move;

        if captured.is_some() {
            let opponent = &mut self.registries[side.opposite().index()];
            opponent.mark_captured(to)?;
            if let Some(lost) = opponent.fully_captured_kind() {
                self.outcome = side.victory();
                info!(
                    "{} lost every {lost}; outcome {}",
                    side.opposite(),
                    self.outcome
                );
            }
        }

        self.registries[side.index()].relocate(from, Location::OnBoard(to))?;
        self.side_to_move = side.opposite();

        debug!(
            "{side} {piece} {from}{}{to}",
            if captured.is_some() { "x" } else { "-" }
        );

        Ok(MoveReport {
            mover: side,
            piece,
            from,
            to,
            captured,
            outcome: self.outcome,
        })
    }
}
