use crate::document::BoardDocument;
use crate::message::{BoardCommand, BoardEvent};

/// A viewer's local copy of the board, kept as two layers: `confirmed`
/// holds what the server has broadcast, `predicted` additionally holds
/// local commands applied optimistically before any server round trip.
/// The server never echoes a command back to its originator, so the
/// layers converge through deltas from others and through snapshots.
pub struct ClientReplicaDocument {
    confirmed: BoardDocument,
    predicted: BoardDocument,
}

impl ClientReplicaDocument {
    pub fn new(snapshot: BoardDocument) -> Self {
        Self {
            confirmed: snapshot.clone(),
            predicted: snapshot,
        }
    }

    /// Optimistic apply. The command lands on the predicted layer
    /// immediately and is handed back to be transmitted unchanged.
    pub fn handle_local_command(&mut self, command: BoardCommand) -> BoardCommand {
        self.predicted.apply(command.clone());
        command
    }

    /// Remote changes are authoritative and already authorized by the
    /// server; they apply to both layers without re-validation.
    pub fn handle_remote_event(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::State { data, .. } => self.replace(data),
            delta => {
                if let Some(command) = delta.into_command() {
                    self.confirmed.apply(command.clone());
                    self.predicted.apply(command);
                }
            }
        }
    }

    /// Wholesale replacement. Any divergence accumulated in the
    /// predicted layer is discarded.
    pub fn replace(&mut self, snapshot: BoardDocument) {
        self.confirmed = snapshot.clone();
        self.predicted = snapshot;
    }

    /// What the viewer renders.
    pub fn view(&self) -> &BoardDocument {
        &self.predicted
    }

    pub fn confirmed(&self) -> &BoardDocument {
        &self.confirmed
    }
}
