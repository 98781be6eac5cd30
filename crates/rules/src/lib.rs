//! Chess legality seam for the room coordinator.
//!
//! The coordinator never reasons about chess itself. It consumes the
//! narrow [`Rules`] trait: hand in a position and a proposed move, get
//! back the resulting position and terminal flags, or nothing when the
//! move is illegal. [`Libre`] is the production implementation, backed
//! by the `chess` crate's move generation.
//!
//! ## Types
//!
//! - [`Position`] — authoritative game state, FEN in and out
//! - [`Move`] — proposed (from, to, promotion) tuple
//! - [`Verdict`] — applied move result with checkmate/stalemate flags
mod engine;
mod position;

pub use engine::*;
pub use position::*;

pub use chess::Color;
pub use chess::Piece;
pub use chess::Square;
