//! Move numbers and movetext formatting
//!
//! Plies are counted from zero: ply 0 is White's first move, ply 1 is Black's reply.

use std::fmt::{self, Display, Write};

/// Returns the fullmove number of the move made at ply `ply`
#[inline]
pub const fn to_fullmoves(ply: u32) -> u32 {
    ply / 2 + 1
}

/// Prefix for the move made at ply `ply`, i.e. `1.` for White and `1...` for Black
///
/// Implements [`Display`], use [`format_move_number()`] to get a `String`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MoveNumber(pub u32);

impl Display for MoveNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", to_fullmoves(self.0))?;
        if self.0 % 2 == 1 {
            write!(f, "..")?;
        }
        Ok(())
    }
}

/// Returns the prefix for the move made at ply `ply`
///
/// # Example
///
/// ```
/// # use fenpgn::movetext::format_move_number;
/// #
/// assert_eq!(format_move_number(0), "1.");
/// assert_eq!(format_move_number(1), "1...");
/// assert_eq!(format_move_number(4), "3.");
/// ```
#[inline]
pub fn format_move_number(ply: u32) -> String {
    MoveNumber(ply).to_string()
}

/// Formats a line of SAN moves with move numbers, starting from ply `first_ply`
///
/// # Example
///
/// ```
/// # use fenpgn::movetext::format_moves;
/// #
/// let sans = ["e4", "e5", "Nf3", "Nc6", "Bg5"];
/// assert_eq!(format_moves(&sans, 0), "1.e4 e5 2.Nf3 Nc6 3.Bg5");
/// assert_eq!(format_moves(&sans, 1), "1...e4 2.e5 Nf3 3.Nc6 Bg5");
/// ```
pub fn format_moves<S: AsRef<str>>(sans: &[S], first_ply: u32) -> String {
    let mut res = String::new();
    let mut ply = first_ply;
    for (i, san) in sans.iter().enumerate() {
        if i != 0 {
            res.push(' ');
        }
        // Black's move only needs a number if it starts the line
        if i == 0 || ply % 2 == 0 {
            // Writing into a `String` never fails
            let _ = write!(res, "{}", MoveNumber(ply));
        }
        res.push_str(san.as_ref());
        ply += 1;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullmoves() {
        assert_eq!(to_fullmoves(0), 1);
        assert_eq!(to_fullmoves(1), 1);
        assert_eq!(to_fullmoves(2), 2);
        assert_eq!(to_fullmoves(41), 21);
    }

    #[test]
    fn test_move_number() {
        assert_eq!(format_move_number(0), "1.");
        assert_eq!(format_move_number(1), "1...");
        assert_eq!(format_move_number(2), "2.");
        assert_eq!(format_move_number(41), "21...");
        assert_eq!(MoveNumber(5).to_string(), "3...");
    }

    #[test]
    fn test_format_moves() {
        let sans = ["e4", "e5", "Nf3", "Nc6", "Bg5"];
        assert_eq!(format_moves(&sans, 0), "1.e4 e5 2.Nf3 Nc6 3.Bg5");
        assert_eq!(format_moves(&sans, 1), "1...e4 2.e5 Nf3 3.Nc6 Bg5");
        assert_eq!(format_moves(&sans[..1], 0), "1.e4");
        assert_eq!(format_moves(&sans[..1], 1), "1...e4");
        assert_eq!(format_moves(&sans[..2], 20), "11.e4 e5");
        assert_eq!(format_moves::<&str>(&[], 0), "");
        assert_eq!(format_moves::<&str>(&[], 1), "");

        let owned: Vec<String> = sans.iter().map(|s| s.to_string()).collect();
        assert_eq!(format_moves(&owned, 3), "2...e4 3.e5 Nf3 4.Nc6 Bg5");
    }
}
