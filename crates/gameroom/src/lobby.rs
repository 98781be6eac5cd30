use super::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// Process-wide room registry.
///
/// Rooms are created lazily on first reference and live for the rest of
/// the process; nothing ever deletes them, so the map only grows. Each
/// room sits behind its own mutex, so traffic in one room never
/// contends with another; the outer lock is held only long enough to
/// clone the `Arc`.
pub struct Lobby {
    rooms: RwLock<HashMap<String, Arc<Mutex<Room>>>>,
}

impl Lobby {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }
    /// Returns the room for a key, creating it at the start position
    /// the first time the key is seen. Idempotent.
    pub async fn get_or_create(&self, key: &str) -> Arc<Mutex<Room>> {
        if let Some(room) = self.get(key).await {
            return room;
        }
        self.rooms
            .write()
            .await
            .entry(key.to_string())
            .or_insert_with(|| {
                log::debug!("[lobby] created room {}", key);
                Arc::new(Mutex::new(Room::new(key)))
            })
            .clone()
    }
    pub async fn get(&self, key: &str) -> Option<Arc<Mutex<Room>>> {
        self.rooms.read().await.get(key).cloned()
    }
    /// Snapshot of every room, for disconnect sweeps.
    pub(crate) async fn all(&self) -> Vec<Arc<Mutex<Room>>> {
        self.rooms.read().await.values().cloned().collect()
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}
