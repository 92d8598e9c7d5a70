//! Per-side piece registry.
//!
//! A `SideRegistry` owns every piece of one color: its identity, kind, move
//! count and location. Alongside the records it keeps an occupancy mask of
//! the squares its live pieces stand on. Every location change goes through
//! [`SideRegistry::relocate`], which updates the record and the mask
//! together, so the mask always equals the set of live piece squares.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::starting_layout;
use crate::game_state::chess_types::{Color, Location, PieceKind, Square, ALL_PIECE_KINDS};
use crate::moves::pawn_moves::is_pawn_move;

/// Identity of a piece within its side's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRecord {
    /// Unique within the side (`PAWN1`, `ROOK2`, `QUEEN`). Informational.
    pub name: String,
    pub kind: PieceKind,
    /// Non-capturing relocations made by this piece.
    pub move_count: u32,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideRegistry {
    color: Color,
    pieces: Vec<PieceRecord>,
    occupancy: u64,
}

impl SideRegistry {
    /// The 16 pieces of `color` on their standard starting squares.
    pub fn new(color: Color) -> Self {
        let placements = starting_layout(color)
            .into_iter()
            .filter_map(|(kind, file, rank)| Square::new(file, rank).map(|sq| (kind, sq, 0)));
        Self::build(color, placements)
    }

    /// Registry from explicit `(kind, square, move_count)` placements.
    ///
    /// Names are assigned per kind in the given order. Two pieces on one
    /// square are rejected.
    pub fn from_placements(
        color: Color,
        placements: impl IntoIterator<Item = (PieceKind, Square, u32)>,
    ) -> Result<Self, ChessErrors> {
        let placements: Vec<_> = placements.into_iter().collect();
        let mut seen = 0u64;
        for (_, square, _) in &placements {
            if seen & square.mask() != 0 {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "two {color} pieces on {square}"
                )));
            }
            seen |= square.mask();
        }
        Ok(Self::build(color, placements))
    }

    fn build(color: Color, placements: impl IntoIterator<Item = (PieceKind, Square, u32)>) -> Self {
        let placements: Vec<_> = placements.into_iter().collect();

        let mut totals = [0usize; 6];
        for (kind, _, _) in &placements {
            totals[kind.index()] += 1;
        }

        let mut numbering = [0usize; 6];
        let mut pieces = Vec::with_capacity(placements.len());
        let mut occupancy = 0u64;

        for (kind, square, move_count) in placements {
            numbering[kind.index()] += 1;
            let singleton = matches!(kind, PieceKind::Queen | PieceKind::King)
                && totals[kind.index()] == 1;
            let name = if singleton {
                kind.name_prefix().to_owned()
            } else {
                format!("{}{}", kind.name_prefix(), numbering[kind.index()])
            };

            occupancy |= square.mask();
            pieces.push(PieceRecord {
                name,
                kind,
                move_count,
                location: Location::OnBoard(square),
            });
        }

        Self {
            color,
            pieces,
            occupancy,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Identity of the live piece on `square`, if this side holds it.
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        if !self.occupies(square) {
            return None;
        }
        self.pieces
            .iter()
            .position(|p| p.location == Location::OnBoard(square))
            .map(|i| PieceId(i as u8))
    }

    /// Kind of a piece handed out by this registry.
    #[inline]
    pub fn kind_of(&self, id: PieceId) -> PieceKind {
        self.pieces[id.index()].kind
    }

    #[inline]
    pub fn record(&self, id: PieceId) -> Option<&PieceRecord> {
        self.pieces.get(id.index())
    }

    #[inline]
    pub fn occupies(&self, square: Square) -> bool {
        self.occupancy & square.mask() != 0
    }

    /// Bit `i` is set iff a live piece stands on the square with index `i`.
    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.occupancy
    }

    /// Moves the piece on `source` to `destination`.
    ///
    /// A move to a square increments the piece's move count; a move to
    /// [`Location::Captured`] leaves it unchanged.
    pub fn relocate(
        &mut self,
        source: Square,
        destination: Location,
    ) -> Result<PieceId, ChessErrors> {
        let id = self
            .piece_at(source)
            .ok_or(ChessErrors::EmptySquare(source))?;
        let record = &mut self.pieces[id.index()];

        record.location = destination;
        self.occupancy &= !source.mask();
        if let Location::OnBoard(square) = destination {
            self.occupancy |= square.mask();
            record.move_count += 1;
        }

        Ok(id)
    }

    /// Takes the piece on `square` off the board.
    #[inline]
    pub fn mark_captured(&mut self, square: Square) -> Result<PieceId, ChessErrors> {
        self.relocate(square, Location::Captured)
    }

    /// True iff no piece of `kind` is left on the board (vacuously true
    /// when the side never had one).
    pub fn all_captured(&self, kind: PieceKind) -> bool {
        self.pieces
            .iter()
            .filter(|p| p.kind == kind)
            .all(|p| p.location.is_captured())
    }

    /// First kind (in `ALL_PIECE_KINDS` order) this side has lost entirely.
    pub fn fully_captured_kind(&self) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| self.all_captured(*kind))
    }

    /// True once this side has lost the game.
    #[inline]
    pub fn any_kind_fully_captured(&self) -> bool {
        self.fully_captured_kind().is_some()
    }

    /// Direction-aware pawn rule for the pawn `id` moving `source -> destination`.
    pub fn pawn_move_legal(
        &self,
        id: PieceId,
        opponent: &SideRegistry,
        source: Square,
        destination: Square,
    ) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };
        is_pawn_move(
            self.color,
            record.move_count,
            source,
            destination,
            opponent.occupies(destination),
        )
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &PieceRecord)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u8), p))
    }

    /// Squares of live pieces, ordered by square index.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> {
        let mut remaining = self.occupancy;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros() as u8;
            remaining &= remaining - 1;
            Some(Square::from_index(index))
        })
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.occupancy.count_ones() as usize
    }
}
