use rky_rules::Color;
use serde::Serialize;

/// A connection's standing in a room.
///
/// Decided once at join time by [`crate::Seating`] and never
/// renegotiated afterward. Wire representation matches the client
/// convention: single letters for the sides, `spectator` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
    #[serde(rename = "spectator")]
    Spectator,
}

impl Role {
    /// The side this role plays, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Role::White => Some(Color::White),
            Role::Black => Some(Color::Black),
            Role::Spectator => None,
        }
    }
    /// True for either seated side.
    pub fn is_player(&self) -> bool {
        self.color().is_some()
    }
}

impl From<Color> for Role {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Role::White,
            Color::Black => Role::Black,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::White => write!(f, "white"),
            Role::Black => write!(f, "black"),
            Role::Spectator => write!(f, "spectator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_map_to_colors() {
        assert_eq!(Role::White.color(), Some(Color::White));
        assert_eq!(Role::Black.color(), Some(Color::Black));
        assert_eq!(Role::Spectator.color(), None);
    }
    #[test]
    fn spectators_are_not_players() {
        assert!(Role::White.is_player());
        assert!(!Role::Spectator.is_player());
    }
}
