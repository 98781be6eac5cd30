use super::*;
use rky_core::ID;
use rky_rules::Position;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// Marker for per-connection identity.
///
/// An `ID<Connection>` is stable for the life of one transport
/// connection and unrelated across reconnects: a reconnect is a brand
/// new handle with no prior role.
pub struct Connection;

/// One game's isolated state plus its participants.
///
/// Holds the authoritative position, the role each connection was
/// assigned at join time, and the delivery group for broadcasts.
/// All mutation happens under the room's own mutex in [`Lobby`], so
/// two racing move attempts can never both observe the pre-move turn.
pub struct Room {
    key: String,
    position: Position,
    seats: HashMap<ID<Connection>, Role>,
    outbox: HashMap<ID<Connection>, UnboundedSender<ServerMessage>>,
}

impl Room {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            position: Position::default(),
            seats: HashMap::new(),
            outbox: HashMap::new(),
        }
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn position(&self) -> &Position {
        &self.position
    }
    /// Single mutation point for game state, driven by the arbiter.
    pub(crate) fn advance(&mut self, position: Position) {
        self.position = position;
    }
}

impl Room {
    /// Joins a connection: registers its delivery channel and assigns a
    /// role. Re-joining is idempotent; an existing role is kept.
    pub fn seat(&mut self, handle: ID<Connection>, tx: UnboundedSender<ServerMessage>) -> Role {
        self.outbox.insert(handle, tx);
        match self.seats.get(&handle) {
            Some(role) => *role,
            None => {
                let role = Seating::assign(self.seats.values());
                self.seats.insert(handle, role);
                role
            }
        }
    }
    /// Removes a connection from membership and role bookkeeping in one
    /// step. Returns whether the handle was present.
    pub fn leave(&mut self, handle: ID<Connection>) -> bool {
        let present = self.outbox.remove(&handle).is_some();
        self.seats.remove(&handle);
        present
    }
    pub fn role_of(&self, handle: ID<Connection>) -> Option<Role> {
        self.seats.get(&handle).copied()
    }
    pub fn members(&self) -> usize {
        self.outbox.len()
    }
    /// Stringified roster for the wire.
    pub fn roster(&self) -> HashMap<String, Role> {
        self.seats
            .iter()
            .map(|(handle, role)| (handle.to_string(), *role))
            .collect()
    }
}

impl Room {
    /// Sends a message to one connection. Fire-and-forget: a closed
    /// channel is logged and otherwise ignored.
    pub fn unicast(&self, handle: ID<Connection>, message: ServerMessage) {
        match self.outbox.get(&handle).map(|tx| tx.send(message)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[room {}] unicast to {} failed: {:?}", self.key, handle, e),
            None => log::warn!("[room {}] unicast to {}: no such member", self.key, handle),
        }
    }
    /// Sends a message to every connection in the delivery group.
    pub fn broadcast(&self, message: ServerMessage) {
        log::debug!("[room {}] broadcast: {}", self.key, message.label());
        for (handle, tx) in self.outbox.iter() {
            if let Err(e) = tx.send(message.clone()) {
                log::warn!("[room {}] broadcast to {} failed: {:?}", self.key, handle, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    fn handle() -> ID<Connection> {
        ID::default()
    }

    #[test]
    fn seats_fill_in_join_order() {
        let mut room = Room::new("r1");
        let (tx, _rx) = unbounded_channel();
        assert_eq!(room.seat(handle(), tx.clone()), Role::White);
        assert_eq!(room.seat(handle(), tx.clone()), Role::Black);
        assert_eq!(room.seat(handle(), tx.clone()), Role::Spectator);
        assert_eq!(room.seat(handle(), tx), Role::Spectator);
    }
    #[test]
    fn rejoining_keeps_the_assigned_role() {
        let mut room = Room::new("r1");
        let (tx, _rx) = unbounded_channel();
        let first = handle();
        assert_eq!(room.seat(first, tx.clone()), Role::White);
        assert_eq!(room.seat(handle(), tx.clone()), Role::Black);
        assert_eq!(room.seat(first, tx), Role::White);
    }
    #[test]
    fn leave_clears_role_and_membership() {
        let mut room = Room::new("r1");
        let (tx, _rx) = unbounded_channel();
        let white = handle();
        room.seat(white, tx.clone());
        let black = handle();
        room.seat(black, tx);
        assert!(room.leave(white));
        assert_eq!(room.role_of(white), None);
        assert_eq!(room.role_of(black), Some(Role::Black));
        assert_eq!(room.members(), 1);
        assert!(!room.leave(white));
    }
    #[test]
    fn at_most_one_seat_per_side() {
        let mut room = Room::new("r1");
        let (tx, _rx) = unbounded_channel();
        for _ in 0..8 {
            room.seat(handle(), tx.clone());
        }
        let roster = room.roster();
        let whites = roster.values().filter(|r| **r == Role::White).count();
        let blacks = roster.values().filter(|r| **r == Role::Black).count();
        assert_eq!(whites, 1);
        assert_eq!(blacks, 1);
    }
}
