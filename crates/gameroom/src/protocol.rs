use rky_rules::Piece;
use rky_rules::Square;
use serde::Deserialize;
use std::str::FromStr;

/// Messages received from clients over the wire.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Enter a room, creating it on first reference. Idempotent per
    /// connection.
    Join { room: String },
    /// Attempt a move. Promotion is an optional piece letter; absent
    /// means the server-side queen default applies.
    Move {
        room: String,
        from: String,
        to: String,
        #[serde(default)]
        promotion: Option<String>,
    },
}

/// Errors raised while decoding client input.
///
/// These never travel back to the client; a frame that fails to decode
/// simply produces no effect.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    Unparseable(String),
    BadSquare(String),
    BadPiece(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparseable(s) => write!(f, "unparseable frame: {}", s),
            Self::BadSquare(s) => write!(f, "bad square: {}", s),
            Self::BadPiece(s) => write!(f, "bad piece: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Wire-format boundary: client JSON and algebraic names in, domain
/// types out.
pub struct Protocol;

impl Protocol {
    pub fn decode(text: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str(text).map_err(|_| ProtocolError::Unparseable(text.to_string()))
    }
    pub fn square(name: &str) -> Result<Square, ProtocolError> {
        Square::from_str(name).map_err(|_| ProtocolError::BadSquare(name.to_string()))
    }
    pub fn piece(name: &str) -> Result<Piece, ProtocolError> {
        match name {
            "q" => Ok(Piece::Queen),
            "r" => Ok(Piece::Rook),
            "b" => Ok(Piece::Bishop),
            "n" => Ok(Piece::Knight),
            _ => Err(ProtocolError::BadPiece(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_join() {
        let message = Protocol::decode(r#"{"type":"join","room":"r1"}"#).unwrap();
        assert!(matches!(message, ClientMessage::Join { room } if room == "r1"));
    }
    #[test]
    fn decodes_move_without_promotion() {
        let text = r#"{"type":"move","room":"r1","from":"e2","to":"e4"}"#;
        match Protocol::decode(text).unwrap() {
            ClientMessage::Move { promotion, .. } => assert!(promotion.is_none()),
            other => panic!("unexpected message: {:?}", other),
        }
    }
    #[test]
    fn decodes_move_with_promotion() {
        let text = r#"{"type":"move","room":"r1","from":"e7","to":"e8","promotion":"n"}"#;
        match Protocol::decode(text).unwrap() {
            ClientMessage::Move { promotion, .. } => assert_eq!(promotion.as_deref(), Some("n")),
            other => panic!("unexpected message: {:?}", other),
        }
    }
    #[test]
    fn rejects_malformed_frames() {
        assert!(Protocol::decode("not json").is_err());
        assert!(Protocol::decode(r#"{"type":"resign"}"#).is_err());
    }
    #[test]
    fn parses_squares_and_pieces() {
        assert!(Protocol::square("e2").is_ok());
        assert!(Protocol::square("j9").is_err());
        assert_eq!(Protocol::piece("q").unwrap(), Piece::Queen);
        assert!(Protocol::piece("k").is_err());
    }
}
