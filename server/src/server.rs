use tokio::sync::mpsc::{channel, Sender};

use board::{permits, BoardDocument, BoardEvent};

use crate::connection::{ConnectionCommand, ConnectionEvent};
use crate::registry::ConnectionRegistry;

pub type ServerTx = Sender<ConnectionCommand>;

/// The synchronization engine. Owns the one board document and the live
/// connection set; commands are handled to completion one at a time, so
/// the document never observes a half-applied operation and no locking
/// is needed.
struct Server {
    document: BoardDocument,
    connections: ConnectionRegistry,
}

impl Server {
    fn new(document: BoardDocument) -> Self {
        Self {
            document,
            connections: ConnectionRegistry::new(),
        }
    }

    fn handle_connection_command(&mut self, command: ConnectionCommand) {
        match command {
            ConnectionCommand::Connect { tx, role } => {
                let connection_id = self.connections.insert(tx, role);
                self.connections
                    .send(&connection_id, ConnectionEvent::Connected { connection_id });
                // Exactly one snapshot, and it precedes any delta this
                // connection can receive from the serialized loop.
                self.connections.send(
                    &connection_id,
                    ConnectionEvent::Board(BoardEvent::State {
                        data: self.document.snapshot(),
                        role,
                    }),
                );
                log::info!(
                    "Connection {} opened, role {:?}, {} connected",
                    connection_id,
                    role,
                    self.connections.len()
                );
            }
            ConnectionCommand::Disconnect { from } => {
                if self.connections.remove(&from) {
                    log::info!(
                        "Connection {} closed, {} connected",
                        from,
                        self.connections.len()
                    );
                }
            }
            ConnectionCommand::Board { from, command } => {
                let role = self.connections.role(&from);
                if !permits(role, &command) {
                    // Fail closed: no mutation, no broadcast, no reply.
                    log::debug!(
                        "Discarding {:?} from connection {} with role {:?}",
                        command,
                        from,
                        role
                    );
                    return;
                }
                if let Some(delta) = self.document.apply(command) {
                    self.connections.broadcast(delta, &from);
                }
            }
        }
    }
}

/// Spawns the single event-processing task. The document is constructed
/// by the caller and handed over; nothing else ever holds it.
pub fn spawn_server(document: BoardDocument) -> ServerTx {
    let (srv_tx, mut srv_rx) = channel::<ConnectionCommand>(64);

    tokio::spawn(async move {
        let mut server = Server::new(document);

        while let Some(command) = srv_rx.recv().await {
            server.handle_connection_command(command);
        }
    });

    srv_tx
}
