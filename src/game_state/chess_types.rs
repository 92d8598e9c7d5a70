//! Core value types shared by the registry, the movement rules and the
//! game controller.
//!
//! Squares carry 1-based file/rank coordinates for delta arithmetic and
//! expose a `0..64` index (`a1 == 0`, `h8 == 63`) for occupancy masks.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::side_registry::{PieceId, PieceRecord, SideRegistry};

/// Side to move. `Light` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank direction a pawn of this side advances in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Outcome recorded when this side wins.
    #[inline]
    pub const fn victory(self) -> Outcome {
        match self {
            Color::Light => Outcome::LightWon,
            Color::Dark => Outcome::DarkWon,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind (color is carried by the owning registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case name prefix used for piece identities (`PAWN3`, `ROOK1`).
    pub const fn name_prefix(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Game status. Both won states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unfinished,
    LightWon,
    DarkWon,
}

impl Outcome {
    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Outcome::Unfinished)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "UNFINISHED"),
            Outcome::LightWon => write!(f, "LIGHT_WON"),
            Outcome::DarkWon => write!(f, "DARK_WON"),
        }
    }
}

/// A board coordinate. `file` and `rank` are both in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Returns `None` when either coordinate is outside `1..=8`.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file >= 1 && file <= 8 && rank >= 1 && rank <= 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Inverse of [`Square::index`]. `index` must be below 64.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self {
            file: index % 8 + 1,
            rank: index / 8 + 1,
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn index(self) -> u8 {
        (self.rank - 1) * 8 + (self.file - 1)
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// Square reached by stepping `d_file`/`d_rank`, if still on the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = u8::try_from(self.file as i8 + d_file).ok()?;
        let rank = u8::try_from(self.rank as i8 + d_rank).ok()?;
        Self::new(file, rank)
    }

    /// `(to.file - from.file, to.rank - from.rank)`.
    #[inline]
    pub const fn delta(from: Self, to: Self) -> (i8, i8) {
        (
            to.file as i8 - from.file as i8,
            to.rank as i8 - from.rank as i8,
        )
    }

    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file - 1) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

/// Where a piece currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    OnBoard(Square),
    Captured,
}

impl Location {
    #[inline]
    pub const fn square(self) -> Option<Square> {
        match self {
            Location::OnBoard(square) => Some(square),
            Location::Captured => None,
        }
    }

    #[inline]
    pub const fn is_captured(self) -> bool {
        matches!(self, Location::Captured)
    }
}
