use super::*;
use chess::Board;
use chess::BoardStatus;
use chess::ChessMove;

/// A proposed move: coordinates plus an optional promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

/// Result of an accepted move.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// The move as actually applied. Promotion is the piece the move
    /// promoted to, `None` when it was no promotion at all, whatever
    /// hint came in.
    pub applied: Move,
    /// Position reached after the move.
    pub next: Position,
    /// The mover delivered checkmate.
    pub checkmate: bool,
    /// The mover left the opponent with no legal reply and no check.
    pub stalemate: bool,
}

/// Full-legality oracle consumed by the turn arbiter.
///
/// Implementations own every chess-specific question: move legality,
/// resulting position, and terminal conditions. `None` means the move
/// is illegal for the given position.
pub trait Rules: Send + Sync {
    fn apply(&self, position: &Position, mv: Move) -> Option<Verdict>;
}

/// Production [`Rules`] backed by the `chess` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Libre;

impl Libre {
    /// Resolves a coordinate pair into a concrete legal move.
    /// The plain move is preferred; the promotion variant only matches
    /// when the backend demands a promotion piece for that square.
    fn resolve(board: &Board, mv: Move) -> Option<ChessMove> {
        [None, mv.promotion]
            .into_iter()
            .map(|promotion| ChessMove::new(mv.from, mv.to, promotion))
            .find(|candidate| board.legal(*candidate))
    }
}

impl Rules for Libre {
    fn apply(&self, position: &Position, mv: Move) -> Option<Verdict> {
        let board = position.board();
        let resolved = Self::resolve(board, mv)?;
        let next = board.make_move_new(resolved);
        let status = next.status();
        Some(Verdict {
            applied: Move {
                from: mv.from,
                to: mv.to,
                promotion: resolved.get_promotion(),
            },
            next: Position::advance(next),
            checkmate: status == BoardStatus::Checkmate,
            stalemate: status == BoardStatus::Stalemate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(name: &str) -> Square {
        Square::from_str(name).unwrap()
    }
    fn mv(from: &str, to: &str) -> Move {
        Move {
            from: sq(from),
            to: sq(to),
            promotion: None,
        }
    }

    #[test]
    fn opening_pawn_push_is_legal() {
        let verdict = Libre.apply(&Position::default(), mv("e2", "e4")).unwrap();
        assert_eq!(verdict.next.turn(), Color::Black);
        assert_eq!(verdict.applied.promotion, None);
        assert!(!verdict.checkmate);
        assert!(!verdict.stalemate);
    }
    #[test]
    fn plain_moves_ignore_a_stray_promotion_hint() {
        let hinted = Move {
            promotion: Some(Piece::Queen),
            ..mv("e2", "e4")
        };
        let verdict = Libre.apply(&Position::default(), hinted).unwrap();
        assert_eq!(verdict.applied.promotion, None);
    }
    #[test]
    fn illegal_moves_yield_nothing() {
        let start = Position::default();
        assert!(Libre.apply(&start, mv("e2", "e5")).is_none());
        assert!(Libre.apply(&start, mv("e7", "e5")).is_none()); // wrong side
        assert!(Libre.apply(&start, mv("a1", "a3")).is_none()); // blocked rook
    }
    #[test]
    fn promotion_requires_the_hint() {
        let position = Position::from_str("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(Libre.apply(&position, mv("e7", "e8")).is_none());
        let promoting = Move {
            promotion: Some(Piece::Queen),
            ..mv("e7", "e8")
        };
        let verdict = Libre.apply(&position, promoting).unwrap();
        assert_eq!(verdict.next.turn(), Color::Black);
        assert_eq!(verdict.applied.promotion, Some(Piece::Queen));
    }
    #[test]
    fn fools_mate_is_checkmate() {
        let position = ["f2f3", "e7e5", "g2g4"]
            .iter()
            .fold(Position::default(), |position, uci| {
                Libre
                    .apply(&position, mv(&uci[..2], &uci[2..]))
                    .unwrap()
                    .next
            });
        let verdict = Libre.apply(&position, mv("d8", "h4")).unwrap();
        assert!(verdict.checkmate);
        assert!(!verdict.stalemate);
    }
    #[test]
    fn queen_lift_into_stalemate() {
        let position = Position::from_str("k7/8/8/1Q6/8/8/8/7K w - - 0 1").unwrap();
        let verdict = Libre.apply(&position, mv("b5", "b6")).unwrap();
        assert!(verdict.stalemate);
        assert!(!verdict.checkmate);
    }
}
