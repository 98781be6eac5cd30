use super::*;
use rky_rules::Color;
use rky_rules::Move;
use serde::Serialize;
use std::collections::HashMap;

/// Messages sent from server to client over the wire.
///
/// Sides travel as single letters ("w"/"b") and positions as FEN,
/// matching what board clients expect.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Authoritative position. Sent privately on join (no last move),
    /// broadcast on every accepted move.
    State {
        fen: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_move: Option<LastMove>,
        turn: String,
    },
    /// Current role roster, keyed by connection handle. Broadcast on join.
    RoomInfo { players: HashMap<String, Role> },
    /// Checkmate reached; the named side delivered it.
    GameOver { winner: String },
}

/// The move that produced a broadcast state, in algebraic coordinates.
#[derive(Clone, Debug, Serialize)]
pub struct LastMove {
    pub from: String,
    pub to: String,
}

impl ServerMessage {
    /// Private snapshot for a joining connection.
    pub fn snapshot(fen: String, turn: Color) -> Self {
        Self::State {
            fen,
            last_move: None,
            turn: Self::side(turn).to_string(),
        }
    }
    /// Post-move state for the whole room.
    pub fn state(fen: String, mv: &Move, turn: Color) -> Self {
        Self::State {
            fen,
            last_move: Some(LastMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
            }),
            turn: Self::side(turn).to_string(),
        }
    }
    pub fn room_info(players: HashMap<String, Role>) -> Self {
        Self::RoomInfo { players }
    }
    pub fn game_over(winner: Color) -> Self {
        Self::GameOver {
            winner: Self::side(winner).to_string(),
        }
    }
    fn side(color: Color) -> &'static str {
        match color {
            Color::White => "w",
            Color::Black => "b",
        }
    }
    /// Variant name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::State { .. } => "state",
            Self::RoomInfo { .. } => "room_info",
            Self::GameOver { .. } => "game_over",
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_omits_last_move() {
        let json = ServerMessage::snapshot("fen".to_string(), Color::White).to_json();
        assert!(json.contains(r#""type":"state""#));
        assert!(json.contains(r#""turn":"w""#));
        assert!(!json.contains("last_move"));
    }
    #[test]
    fn state_carries_the_move() {
        use rky_rules::Square;
        use std::str::FromStr;
        let mv = Move {
            from: Square::from_str("e2").unwrap(),
            to: Square::from_str("e4").unwrap(),
            promotion: None,
        };
        let json = ServerMessage::state("fen".to_string(), &mv, Color::Black).to_json();
        assert!(json.contains(r#""from":"e2""#));
        assert!(json.contains(r#""to":"e4""#));
        assert!(json.contains(r#""turn":"b""#));
    }
    #[test]
    fn roster_serializes_roles_as_letters() {
        let players = HashMap::from([("abc".to_string(), Role::White)]);
        let json = ServerMessage::room_info(players).to_json();
        assert!(json.contains(r#""abc":"w""#));
    }
    #[test]
    fn game_over_names_the_winner() {
        let json = ServerMessage::game_over(Color::Black).to_json();
        assert!(json.contains(r#""type":"game_over""#));
        assert!(json.contains(r#""winner":"b""#));
    }
}
