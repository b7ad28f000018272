//! # fenpgn
//!
//! Text helpers for a chess club bot: FEN validation and field offsets, PGN tag
//! extraction and movetext formatting.
//!
//! All the functions here are pure and keep no state between calls, so they can be used
//! from any number of threads at once. Chess rules are checked by
//! [`owlchess`](https://crates.io/crates/owlchess), see [`rules`].
//!
//! # Example
//!
//! ```
//! use fenpgn::{fen, pgn, FenComponent, Validation};
//!
//! // Fix the fullmove number reported by a live game feed
//! let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1";
//! assert_eq!(
//!     fen::get_component(fen, FenComponent::FullmoveNum, Validation::LayoutOnly).unwrap(),
//!     "1"
//! );
//! let fixed = fen::with_fullmove_number(fen, 2, Validation::LayoutOnly).unwrap();
//! assert!(fixed.ends_with(" 0 2"));
//!
//! let header = "[Event \"Club Blitz\"]\n[WhiteElo \"1850\"]";
//! assert_eq!(pgn::extract_tag_value(header, "WhiteElo"), Some("1850"));
//! ```

pub mod fen;
pub mod movetext;
pub mod pgn;
pub mod rules;

pub use fen::{FenComponent, FenError, FenRecord, Validation};
pub use pgn::TagPattern;
pub use rules::{LegalityCheck, RulesError};
