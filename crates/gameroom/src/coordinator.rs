use super::*;
use rky_core::ID;
use rky_rules::Libre;
use rky_rules::Piece;
use rky_rules::Rules;
use rky_rules::Square;
use tokio::sync::mpsc::UnboundedSender;

/// Connection-event dispatcher.
///
/// Owns the lobby and the arbiter; every inbound event (join, move
/// attempt, disconnect) flows through here and fans back out to the
/// affected room's delivery group. Rejections and unknown rooms are
/// absorbed silently on the wire, per protocol, but surface as typed
/// [`Outcome`] values for callers.
pub struct Coordinator<R: Rules = Libre> {
    lobby: Lobby,
    arbiter: Arbiter<R>,
}

impl Coordinator<Libre> {
    pub fn new() -> Self {
        Self::with_rules(Libre)
    }
}

impl Default for Coordinator<Libre> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rules> Coordinator<R> {
    pub fn with_rules(rules: R) -> Self {
        Self {
            lobby: Lobby::new(),
            arbiter: Arbiter::new(rules),
        }
    }
    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    /// Routes one decoded client message. Coordinate parsing failures
    /// count as bad attempts and are dropped like any other rejection.
    pub async fn dispatch(
        &self,
        handle: ID<Connection>,
        tx: &UnboundedSender<ServerMessage>,
        message: ClientMessage,
    ) {
        match message {
            ClientMessage::Join { room } => self.join(handle, tx.clone(), &room).await,
            ClientMessage::Move {
                room,
                from,
                to,
                promotion,
            } => {
                let parsed = Self::coordinates(&from, &to, promotion.as_deref());
                match parsed {
                    Ok((from, to, promotion)) => {
                        self.attempt(handle, &room, from, to, promotion).await;
                    }
                    Err(e) => log::debug!("[room {}] {} sent {}", room, handle, e),
                }
            }
        }
    }

    fn coordinates(
        from: &str,
        to: &str,
        promotion: Option<&str>,
    ) -> Result<(Square, Square, Option<Piece>), ProtocolError> {
        Ok((
            Protocol::square(from)?,
            Protocol::square(to)?,
            promotion.map(Protocol::piece).transpose()?,
        ))
    }

    /// Joins a connection to a room: seat it, send it a private
    /// snapshot, and broadcast the updated roster to everyone.
    pub async fn join(&self, handle: ID<Connection>, tx: UnboundedSender<ServerMessage>, key: &str) {
        let room = self.lobby.get_or_create(key).await;
        let mut room = room.lock().await;
        let role = room.seat(handle, tx);
        log::info!("[room {}] {} joined as {}", key, handle, role);
        let snapshot = ServerMessage::snapshot(room.position().fen(), room.position().turn());
        room.unicast(handle, snapshot);
        room.broadcast(ServerMessage::room_info(room.roster()));
    }

    /// Arbitrates one move attempt. Acceptance broadcasts the new state
    /// to the whole room, plus a game-over notice on checkmate; every
    /// rejection produces no message to anyone.
    pub async fn attempt(
        &self,
        handle: ID<Connection>,
        key: &str,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Outcome {
        let room = match self.lobby.get(key).await {
            Some(room) => room,
            None => return Outcome::Rejected(Rejection::UnknownRoom),
        };
        let mut room = room.lock().await;
        let outcome = self.arbiter.attempt(&mut room, handle, from, to, promotion);
        match &outcome {
            Outcome::Accepted {
                mv,
                position,
                checkmate,
                winner,
                ..
            } => {
                log::info!("[room {}] {} played {}{}", key, handle, mv.from, mv.to);
                room.broadcast(ServerMessage::state(position.fen(), mv, position.turn()));
                if *checkmate {
                    log::info!("[room {}] checkmate, {} wins", key, Role::from(*winner));
                    room.broadcast(ServerMessage::game_over(*winner));
                }
            }
            Outcome::Rejected(reason) => {
                log::debug!("[room {}] {} move rejected: {}", key, handle, reason);
            }
        }
        outcome
    }

    /// Removes the connection from every room it belongs to. No
    /// broadcast is emitted; remaining members are not notified.
    pub async fn disconnect(&self, handle: ID<Connection>) {
        for room in self.lobby.all().await {
            let mut room = room.lock().await;
            if room.leave(handle) {
                log::debug!("[room {}] {} left", room.key(), handle);
            }
        }
    }
}
