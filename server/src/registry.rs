use std::collections::HashMap;
use std::num::Wrapping;

use board::{BoardEvent, ConnectionId, Role};

use crate::connection::ConnectionEvent;

pub type ConnectionTx = tokio::sync::mpsc::Sender<ConnectionEvent>;

struct ConnectionHandle {
    tx: ConnectionTx,
    role: Option<Role>,
}

/// The live connection set. Every connection carries the role resolved
/// at handshake time; delivery uses `try_send`, so one backpressured or
/// half-closed viewer drops its own delivery and never stalls the loop
/// or the other viewers.
pub struct ConnectionRegistry {
    id_source: Wrapping<ConnectionId>,
    connections: HashMap<ConnectionId, ConnectionHandle>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            id_source: Wrapping(0),
            connections: HashMap::new(),
        }
    }

    pub fn insert(&mut self, tx: ConnectionTx, role: Option<Role>) -> ConnectionId {
        loop {
            self.id_source += Wrapping(1);
            let connection_id = self.id_source.0;
            // Skip ids still held by a live connection after wrap-around.
            if !self.connections.contains_key(&connection_id) {
                self.connections
                    .insert(connection_id, ConnectionHandle { tx, role });
                return connection_id;
            }
        }
    }

    pub fn role(&self, connection_id: &ConnectionId) -> Option<Role> {
        self.connections
            .get(connection_id)
            .and_then(|handle| handle.role)
    }

    pub fn remove(&mut self, connection_id: &ConnectionId) -> bool {
        self.connections.remove(connection_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn send(&mut self, to: &ConnectionId, event: ConnectionEvent) {
        if let Some(handle) = self.connections.get_mut(to) {
            if let Err(err) = handle.tx.try_send(event) {
                log::debug!("Dropping event for connection {}: {}", to, err);
            }
        }
    }

    pub fn broadcast(&mut self, event: BoardEvent, except: &ConnectionId) {
        for (connection_id, handle) in self.connections.iter_mut() {
            if connection_id == except {
                continue;
            }
            if let Err(err) = handle.tx.try_send(ConnectionEvent::Board(event.clone())) {
                log::debug!("Dropping broadcast for connection {}: {}", connection_id, err);
            }
        }
    }
}
