//! FEN validation and field offsets
//!
//! A FEN consists of six fields separated by single spaces. Besides checking that the
//! position is legal, this module answers where each field starts and ends inside the
//! original string, so that callers can patch a single field (e.g. the fullmove number
//! of a live feed) without reformatting the whole FEN.
//!
//! # Example
//!
//! ```
//! # use fenpgn::fen::{self, FenComponent, Validation};
//! #
//! let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! assert!(fen::is_valid(fen));
//! assert_eq!(
//!     fen::get_component(fen, FenComponent::CastlingRights, Validation::Full).unwrap(),
//!     "KQkq"
//! );
//! assert_eq!(
//!     fen::indices_of_component_delimiters(fen, FenComponent::BoardFen, Validation::Full)
//!         .unwrap(),
//!     0..43
//! );
//! ```

use crate::rules::{LegalityCheck, Owlchess, RulesError};

use std::fmt;
use std::hint;
use std::ops::Range;

use arrayvec::ArrayVec;
use derive_more::Display;
use thiserror::Error;
use tracing::{debug, trace};

/// Error converting a raw integer into [`FenComponent`]
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ComponentIndexError {
    /// Index is not in `0..6`
    #[error("component index {0} is out of range")]
    OutOfRange(usize),
}

/// Error validating or splitting a FEN
#[derive(Debug, Error)]
pub enum FenError {
    /// FEN has leading or trailing whitespace
    #[error("leading or trailing whitespace in FEN")]
    ExtraWhitespace,
    /// FEN doesn't consist of exactly six fields
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    /// Fields are not separated by exactly one ASCII space
    #[error("bad field separator at offset {offset}")]
    Separator { offset: usize },
    /// The position is rejected by the legality check
    #[error("illegal position: {0}")]
    Illegal(#[from] RulesError),
    /// Bad component index
    #[error("bad component: {0}")]
    Index(#[from] ComponentIndexError),
}

/// Field of a FEN
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Display)]
#[repr(u8)]
pub enum FenComponent {
    /// Piece placement, rank by rank
    #[display(fmt = "board")]
    BoardFen = 0,
    /// Side to move, `w` or `b`
    #[display(fmt = "active color")]
    ActiveColor = 1,
    /// Castling rights, subset of `KQkq` or `-`
    #[display(fmt = "castling rights")]
    CastlingRights = 2,
    /// En passant target square or `-`
    #[display(fmt = "en passant target square")]
    EnPassantTargetSquare = 3,
    /// Number of half-moves since the last capture or pawn move
    #[display(fmt = "halfmove clock")]
    HalfmoveClock = 4,
    /// Fullmove number, starting from 1 and incremented after each move by Black
    #[display(fmt = "fullmove number")]
    FullmoveNum = 5,
}

impl FenComponent {
    /// Number of fields in FEN
    pub const COUNT: usize = 6;

    #[inline]
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    /// Converts an index into `FenComponent` without checking
    ///
    /// # Safety
    ///
    /// `val` must be less than [`FenComponent::COUNT`].
    #[inline]
    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => FenComponent::BoardFen,
            1 => FenComponent::ActiveColor,
            2 => FenComponent::CastlingRights,
            3 => FenComponent::EnPassantTargetSquare,
            4 => FenComponent::HalfmoveClock,
            5 => FenComponent::FullmoveNum,
            _ => hint::unreachable_unchecked(),
        }
    }

    /// Converts an index into `FenComponent`
    ///
    /// # Panics
    ///
    /// The function panics if `val >= 6`. Use [`FenComponent::try_from`] for indices that come
    /// from untrusted input.
    #[inline]
    pub const fn from_index(val: usize) -> Self {
        assert!(val < Self::COUNT, "component index must be between 0 and 5");
        unsafe { Self::from_index_unchecked(val) }
    }

    /// Iterates over all the components in the order they appear in FEN
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(|x| unsafe { Self::from_index_unchecked(x) })
    }
}

impl TryFrom<usize> for FenComponent {
    type Error = ComponentIndexError;

    #[inline]
    fn try_from(val: usize) -> Result<Self, Self::Error> {
        if val < Self::COUNT {
            Ok(unsafe { Self::from_index_unchecked(val) })
        } else {
            Err(ComponentIndexError::OutOfRange(val))
        }
    }
}

/// How thoroughly a FEN is checked before its fields are used
///
/// The layout check (no outer whitespace, six fields, single spaces between them) is
/// always performed, as the offsets returned from this module are meaningless without it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Validation {
    /// Check the layout and the legality of the position
    #[default]
    Full,
    /// Check the layout only
    ///
    /// Useful for FENs from trusted sources, like a chess server's game feed.
    LayoutOnly,
}

/// FEN split into its six fields
///
/// The record borrows the original string, and all the offsets it reports are byte offsets
/// into that string.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct FenRecord<'a> {
    src: &'a str,
    fields: [&'a str; FenComponent::COUNT],
}

impl<'a> FenRecord<'a> {
    /// Splits `fen` into fields, validating it with the default legality check
    /// if `validation` is [`Validation::Full`]
    pub fn parse(fen: &'a str, validation: Validation) -> Result<FenRecord<'a>, FenError> {
        Self::parse_with(fen, validation, Owlchess)
    }

    /// Same as [`FenRecord::parse`], but uses `check` as the legality check
    pub fn parse_with<C: LegalityCheck>(
        fen: &'a str,
        validation: Validation,
        check: C,
    ) -> Result<FenRecord<'a>, FenError> {
        let rec = Self::split(fen)?;
        if validation == Validation::Full {
            check.check(fen).map_err(|e| {
                debug!(fen, error = %e, "illegal position in FEN");
                e
            })?;
        }
        Ok(rec)
    }

    fn split(fen: &'a str) -> Result<FenRecord<'a>, FenError> {
        validate_no_extra_whitespace(fen)?;

        let mut fields = ArrayVec::<&'a str, { FenComponent::COUNT }>::new();
        let mut count = 0_usize;
        let mut offset = 0_usize;
        for field in fen.split(' ') {
            if field.is_empty() {
                debug!(fen, offset, "empty field in FEN");
                return Err(FenError::Separator { offset });
            }
            if let Some(pos) = field.find(is_fen_whitespace) {
                debug!(fen, offset = offset + pos, "non-space separator in FEN");
                return Err(FenError::Separator {
                    offset: offset + pos,
                });
            }
            // Keep counting after overflow to report the real number of fields
            let _ = fields.try_push(field);
            count += 1;
            offset += field.len() + 1;
        }

        match fields.into_inner() {
            Ok(fields) if count == FenComponent::COUNT => Ok(FenRecord { src: fen, fields }),
            _ => {
                debug!(fen, count, "wrong number of fields in FEN");
                Err(FenError::FieldCount(count))
            }
        }
    }

    /// Returns the original string
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.src
    }

    /// Returns all the fields in order
    #[inline]
    pub fn components(&self) -> [&'a str; FenComponent::COUNT] {
        self.fields
    }

    /// Returns the field `c`
    #[inline]
    pub fn component(&self, c: FenComponent) -> &'a str {
        self.fields[c.index()]
    }

    /// Returns the offset of the first byte of field `c`
    pub fn start_of(&self, c: FenComponent) -> usize {
        let idx = self.fields[..c.index()]
            .iter()
            .map(|f| f.len())
            .sum::<usize>()
            + c.index();
        assert_eq!(
            self.src.as_bytes()[idx],
            self.component(c).as_bytes()[0],
            "start of {} at {} doesn't match the field in {:?}",
            c,
            idx,
            self.src,
        );
        trace!(fen = self.src, component = %c, idx, "component start");
        idx
    }

    /// Returns the offset of the last byte of field `c` (inclusive)
    pub fn end_of(&self, c: FenComponent) -> usize {
        let idx = self.fields[..=c.index()]
            .iter()
            .map(|f| f.len())
            .sum::<usize>()
            + c.index()
            - 1;
        let field = self.component(c).as_bytes();
        assert_eq!(
            self.src.as_bytes()[idx],
            field[field.len() - 1],
            "end of {} at {} doesn't match the field in {:?}",
            c,
            idx,
            self.src,
        );
        trace!(fen = self.src, component = %c, idx, "component end");
        idx
    }

    /// Returns the byte range of field `c`, so that `&fen[range]` is the field itself
    #[inline]
    pub fn range_of(&self, c: FenComponent) -> Range<usize> {
        let start = self.start_of(c);
        start..start + self.component(c).len()
    }

    /// Returns a new FEN with field `c` replaced by `value`
    ///
    /// The result is not validated.
    pub fn replace(&self, c: FenComponent, value: &str) -> String {
        let range = self.range_of(c);
        let mut res = String::with_capacity(self.src.len() - range.len() + value.len());
        res.push_str(&self.src[..range.start]);
        res.push_str(value);
        res.push_str(&self.src[range.end..]);
        res
    }
}

impl<'a> fmt::Debug for FenRecord<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FenRecord").field(&self.src).finish()
    }
}

impl<'a> fmt::Display for FenRecord<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.src)
    }
}

/// Whitespace as understood by the FEN layout check
///
/// Unicode whitespace plus the ASCII separators U+001C..U+001F, which many tools
/// (e.g. Python's `str.strip()`) also treat as whitespace.
#[inline]
fn is_fen_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Returns `true` if `fen` has no leading or trailing whitespace
///
/// Besides Unicode whitespace, the ASCII separators U+001C..U+001F count as whitespace.
#[inline]
pub fn has_no_extra_whitespace(fen: &str) -> bool {
    fen.trim_matches(is_fen_whitespace) == fen
}

/// Checks that `fen` has no leading or trailing whitespace
pub fn validate_no_extra_whitespace(fen: &str) -> Result<(), FenError> {
    if has_no_extra_whitespace(fen) {
        Ok(())
    } else {
        debug!(fen, "FEN is not stripped");
        Err(FenError::ExtraWhitespace)
    }
}

/// Checks that `fen` is well-formed and describes a legal position
///
/// Unlike a plain chess-rules check, this also rejects FENs with whitespace around them or
/// with anything other than a single space between the fields.
#[inline]
pub fn validate(fen: &str) -> Result<(), FenError> {
    validate_with(fen, Owlchess)
}

/// Same as [`validate()`], but uses `check` as the legality check
#[inline]
pub fn validate_with<C: LegalityCheck>(fen: &str, check: C) -> Result<(), FenError> {
    FenRecord::parse_with(fen, Validation::Full, check).map(drop)
}

/// Returns `true` if [`validate()`] succeeds
#[inline]
pub fn is_valid(fen: &str) -> bool {
    validate(fen).is_ok()
}

/// Returns the six fields of `fen`
pub fn split_components(fen: &str, validation: Validation) -> Result<[&str; 6], FenError> {
    Ok(FenRecord::parse(fen, validation)?.components())
}

/// Returns the field `c` of `fen`
pub fn get_component(fen: &str, c: FenComponent, validation: Validation) -> Result<&str, FenError> {
    Ok(FenRecord::parse(fen, validation)?.component(c))
}

/// Returns the field with index `idx` of `fen`
///
/// Use this one when the index comes from outside, otherwise prefer [`get_component()`].
pub fn get_component_at(fen: &str, idx: usize, validation: Validation) -> Result<&str, FenError> {
    let c = FenComponent::try_from(idx)?;
    get_component(fen, c, validation)
}

/// Returns the offset of the first byte of field `c` in `fen`
pub fn index_of_component_start(
    fen: &str,
    c: FenComponent,
    validation: Validation,
) -> Result<usize, FenError> {
    Ok(FenRecord::parse(fen, validation)?.start_of(c))
}

/// Returns the offset of the last byte of field `c` in `fen`
pub fn index_of_component_end(
    fen: &str,
    c: FenComponent,
    validation: Validation,
) -> Result<usize, FenError> {
    Ok(FenRecord::parse(fen, validation)?.end_of(c))
}

/// Returns the half-open byte range occupied by field `c` in `fen`
pub fn indices_of_component_delimiters(
    fen: &str,
    c: FenComponent,
    validation: Validation,
) -> Result<Range<usize>, FenError> {
    Ok(FenRecord::parse(fen, validation)?.range_of(c))
}

/// Returns `fen` with field `c` replaced by `value`
///
/// Only the original `fen` is validated, the result is not.
pub fn replace_component(
    fen: &str,
    c: FenComponent,
    value: &str,
    validation: Validation,
) -> Result<String, FenError> {
    Ok(FenRecord::parse(fen, validation)?.replace(c, value))
}

/// Returns `fen` with the fullmove number set to `num`
///
/// Some game feeds report a wrong fullmove number for the moves played before the feed
/// was opened. This function helps to fix such FENs.
pub fn with_fullmove_number(fen: &str, num: u32, validation: Validation) -> Result<String, FenError> {
    replace_component(fen, FenComponent::FullmoveNum, &num.to_string(), validation)
}
