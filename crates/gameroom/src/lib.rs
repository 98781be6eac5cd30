//! Async coordination layer for live two-player chess rooms.
//!
//! This crate is the authoritative session layer: it assigns incoming
//! connections to rooms, arbitrates whose move it is, applies accepted
//! moves through the rules seam, and fans resulting state out to every
//! connection in the room.
//!
//! ## Architecture
//!
//! - [`Coordinator`] — connection-event dispatcher wiring everything below
//! - [`Lobby`] — process-wide room registry, rooms created lazily
//! - [`Room`] — one game's state, seats, and delivery group
//! - [`Seating`] — one-shot role assignment policy at join time
//! - [`Arbiter`] — turn ownership checks ahead of the rules engine
//!
//! ## Protocol
//!
//! - [`ClientMessage`] / [`Protocol`] — inbound wire format and decoding
//! - [`ServerMessage`] — outbound wire format
//!
//! Every invalid input is absorbed where it is detected: rejected moves,
//! unknown rooms, and malformed frames produce no reply and never
//! terminate the event stream. Internally each rejection is still a
//! distinguishable [`Outcome`] so callers and tests can observe reasons.
mod arbiter;
mod coordinator;
mod lobby;
mod message;
mod protocol;
mod role;
mod room;
mod seating;

pub use arbiter::*;
pub use coordinator::*;
pub use lobby::*;
pub use message::*;
pub use protocol::*;
pub use role::*;
pub use room::*;
pub use seating::*;
