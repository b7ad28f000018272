//! Chess-rules legality check for FEN strings
//!
//! The rules themselves live in [`owlchess`]. This module only defines the seam through
//! which [`crate::fen`] asks "is this a legal position?", so that callers can plug in
//! another checker if they need to.

use std::error::Error as StdError;

use owlchess::Board;
use thiserror::Error;

/// Error reported by a [`LegalityCheck`]
///
/// Wraps the error of the underlying checker, which is available via
/// [`std::error::Error::source()`] or [`RulesError::inner()`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RulesError(#[source] Box<dyn StdError + Send + Sync + 'static>);

impl RulesError {
    /// Wraps an arbitrary checker error
    pub fn new<E>(err: E) -> RulesError
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        RulesError(err.into())
    }

    /// Returns the wrapped checker error
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }
}

/// Checks that a FEN describes a legal chess position
///
/// Implementors must not keep mutable state between calls: the same checker may be used
/// from many threads at once.
pub trait LegalityCheck {
    fn check(&self, fen: &str) -> Result<(), RulesError>;
}

impl<T: LegalityCheck + ?Sized> LegalityCheck for &T {
    #[inline]
    fn check(&self, fen: &str) -> Result<(), RulesError> {
        (**self).check(fen)
    }
}

/// Adapter to use a closure as a [`LegalityCheck`]
///
/// # Example
///
/// ```
/// # use fenpgn::rules::{FnCheck, LegalityCheck, RulesError};
/// #
/// let only_white = FnCheck(|fen: &str| {
///     if fen.contains(" w ") {
///         Ok(())
///     } else {
///         Err(RulesError::new("black to move"))
///     }
/// });
/// assert!(only_white.check("8/8/8/8/8/8/8/K6k w - - 0 1").is_ok());
/// assert!(only_white.check("8/8/8/8/8/8/8/K6k b - - 0 1").is_err());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FnCheck<F>(pub F);

impl<F> LegalityCheck for FnCheck<F>
where
    F: Fn(&str) -> Result<(), RulesError>,
{
    #[inline]
    fn check(&self, fen: &str) -> Result<(), RulesError> {
        (self.0)(fen)
    }
}

/// Legality check backed by [`owlchess::Board::from_fen`]
///
/// Every call parses into a fresh [`Board`], nothing is cached between calls.
///
/// Covers malformed board layouts, piece counts, kings, pawns on the back ranks,
/// side to move and en passant consistency. Note that `owlchess` silently drops
/// castling rights which are impossible in the position instead of rejecting them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Owlchess;

impl LegalityCheck for Owlchess {
    fn check(&self, fen: &str) -> Result<(), RulesError> {
        Board::from_fen(fen).map(drop).map_err(RulesError::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owlchess() {
        assert!(Owlchess
            .check("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .is_ok());
        assert!(Owlchess
            .check("1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K w - - 1 21")
            .is_ok());

        // Unparsable
        assert!(Owlchess.check("invalid fen").is_err());
        assert!(Owlchess
            .check("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .is_err());
        // Parsable, but illegal
        assert!(Owlchess.check("8/8/8/8/8/8/8/K7 w - - 0 1").is_err());
        assert!(Owlchess
            .check("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNP w KQkq - 0 1")
            .is_err());
    }

    #[test]
    fn test_error_source() {
        let err = Owlchess.check("8/8/8/8/8/8/8/K7 w - - 0 1").unwrap_err();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), err.inner().to_string());
    }

    #[test]
    fn test_by_ref() {
        fn run<C: LegalityCheck>(c: C) -> bool {
            c.check("8/8/8/8/8/8/8/K6k w - - 0 1").is_ok()
        }

        let check = Owlchess;
        assert!(run(&check));
        assert!(run(&&check));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Owlchess>();
        assert_send_sync::<RulesError>();
    }
}
