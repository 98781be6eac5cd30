use super::*;
use rky_core::ID;
use rky_rules::Color;
use rky_rules::Move;
use rky_rules::Piece;
use rky_rules::Position;
use rky_rules::Rules;
use rky_rules::Square;

/// Why a move attempt was refused.
///
/// Never transmitted on the wire; the protocol absorbs rejections
/// silently. Kept as a typed value so callers and tests can still
/// distinguish the reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The handle holds no seat, or spectates.
    NotAPlayer,
    /// The handle's side is not the side to move.
    NotYourTurn,
    /// The rules engine found no legal move for the coordinates.
    IllegalMove,
    /// No room exists under the given key.
    UnknownRoom,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAPlayer => write!(f, "not a player"),
            Self::NotYourTurn => write!(f, "not your turn"),
            Self::IllegalMove => write!(f, "illegal move"),
            Self::UnknownRoom => write!(f, "unknown room"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Outcome of arbitrating one move attempt.
#[derive(Debug)]
pub enum Outcome {
    Accepted {
        /// The move as applied; promotion is `None` unless the move
        /// actually promoted.
        mv: Move,
        /// Position reached after the move.
        position: Position,
        checkmate: bool,
        stalemate: bool,
        /// Side that just moved; the winner when checkmate is set.
        winner: Color,
    },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// Validates turn ownership before consulting the rules engine.
///
/// Checks run in a fixed order, each with its own rejection reason:
/// seat held and playing, side matches the side to move, move legal.
/// Acceptance replaces the room's position in place; the caller holds
/// the room lock, so the check-then-apply pair is atomic.
pub struct Arbiter<R: Rules> {
    rules: R,
}

impl<R: Rules> Arbiter<R> {
    /// Promotion piece used when the client sends no hint. Policy of
    /// this layer, not of the rules engine; pass an explicit piece to
    /// override.
    pub const PROMOTION: Piece = Piece::Queen;

    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn attempt(
        &self,
        room: &mut Room,
        handle: ID<Connection>,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Outcome {
        let color = match room.role_of(handle).and_then(|role| role.color()) {
            Some(color) => color,
            None => return Outcome::Rejected(Rejection::NotAPlayer),
        };
        if color != room.position().turn() {
            return Outcome::Rejected(Rejection::NotYourTurn);
        }
        let mv = Move {
            from,
            to,
            promotion: Some(promotion.unwrap_or(Self::PROMOTION)),
        };
        match self.rules.apply(room.position(), mv) {
            None => Outcome::Rejected(Rejection::IllegalMove),
            Some(verdict) => {
                room.advance(verdict.next.clone());
                Outcome::Accepted {
                    mv: verdict.applied,
                    position: verdict.next,
                    checkmate: verdict.checkmate,
                    stalemate: verdict.stalemate,
                    winner: color,
                }
            }
        }
    }
}
