//! Conversions between coordinate strings (for example `e4`) and squares.
//!
//! File letters map arithmetically onto `1..=8` (`a == 1`); no lookup tables.

use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as `"e4"` to a [`Square`].
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Square::new(file - b'a' + 1, rank - b'0')
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

#[cfg(test)]
mod tests {
    use super::algebraic_to_square;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((a1.file(), a1.rank()), (1, 1));
        assert_eq!((h8.file(), h8.rank()), (8, 8));
        assert_eq!(a1.to_string(), "a1");
        assert_eq!(h8.to_string(), "h8");
    }

    #[test]
    fn from_str_uses_the_same_rules() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(ChessErrors::InvalidAlgebraicChar('i'))
        );
        assert_eq!(
            algebraic_to_square("a9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        );
        assert_eq!(
            algebraic_to_square("a0"),
            Err(ChessErrors::InvalidAlgebraicChar('0'))
        );
        assert!(matches!(
            algebraic_to_square("e10"),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
        assert!(matches!(
            algebraic_to_square(""),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
        assert_eq!(
            algebraic_to_square("E4"),
            Err(ChessErrors::InvalidAlgebraicChar('E'))
        );
    }
}
