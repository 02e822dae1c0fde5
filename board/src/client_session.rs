use std::time::Duration;

use crate::document::BoardDocument;
use crate::message::{BoardCommand, BoardEvent};
use crate::replica::ClientReplicaDocument;
use crate::types::Role;

/// Fixed delay between reconnect attempts. Attempts are unbounded; there
/// is no maximum-retry cutoff.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(1);

enum SessionState {
    Connecting,
    Open {
        role: Option<Role>,
        replica: ClientReplicaDocument,
    },
    Closed,
}

/// Per-viewer connection lifecycle: `Connecting` until the first
/// snapshot arrives, `Open` while the socket is live, `Closed` once the
/// viewer leaves for good. A dropped connection goes back to
/// `Connecting` and waits for a fresh snapshot; there is no attempt to
/// reconcile a partial delta gap.
pub struct ClientSession {
    state: SessionState,
}

impl ClientSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Connecting,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match &self.state {
            SessionState::Open { role, .. } => *role,
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&BoardDocument> {
        match &self.state {
            SessionState::Open { replica, .. } => Some(replica.view()),
            _ => None,
        }
    }

    /// A snapshot always replaces the local state wholesale. It both
    /// completes the handshake and resolves any deltas missed while
    /// disconnected. Deltas arriving before a snapshot are dropped.
    pub fn handle_server_event(&mut self, event: BoardEvent) {
        if let SessionState::Closed = self.state {
            return;
        }
        match event {
            BoardEvent::State { data, role } => {
                self.state = SessionState::Open {
                    role,
                    replica: ClientReplicaDocument::new(data),
                };
            }
            delta => match &mut self.state {
                SessionState::Open { replica, .. } => replica.handle_remote_event(delta),
                _ => log::warn!("Dropping delta received before snapshot"),
            },
        }
    }

    /// Optimistic apply. Returns the command to transmit, or `None` when
    /// no open connection can carry it.
    pub fn handle_local_command(&mut self, command: BoardCommand) -> Option<BoardCommand> {
        match &mut self.state {
            SessionState::Open { replica, .. } => Some(replica.handle_local_command(command)),
            _ => None,
        }
    }

    /// Connection loss. The caller sleeps for the returned delay, dials
    /// again, and expects a fresh snapshot.
    pub fn handle_disconnect(&mut self) -> Duration {
        if !matches!(self.state, SessionState::Closed) {
            self.state = SessionState::Connecting;
        }
        RECONNECT_DELAY
    }

    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_event(role: Option<Role>) -> BoardEvent {
        BoardEvent::State {
            data: BoardDocument::new(),
            role,
        }
    }

    #[test]
    fn deltas_before_the_first_snapshot_are_dropped() {
        let mut session = ClientSession::new();
        session.handle_server_event(BoardEvent::Clear);
        assert!(!session.is_open());

        session.handle_server_event(snapshot_event(Some(Role::General)));
        assert!(session.is_open());
        assert_eq!(session.role(), Some(Role::General));
    }

    #[test]
    fn commands_need_an_open_connection() {
        let mut session = ClientSession::new();
        assert!(session.handle_local_command(BoardCommand::Clear).is_none());

        session.handle_server_event(snapshot_event(None));
        assert!(session.handle_local_command(BoardCommand::Clear).is_some());

        session.handle_disconnect();
        assert!(session.handle_local_command(BoardCommand::Clear).is_none());
    }

    #[test]
    fn disconnect_returns_the_fixed_backoff() {
        let mut session = ClientSession::new();
        session.handle_server_event(snapshot_event(Some(Role::Admin)));

        assert_eq!(session.handle_disconnect(), RECONNECT_DELAY);
        assert!(!session.is_open());

        // Reconnection is completed by the next snapshot.
        session.handle_server_event(snapshot_event(Some(Role::Admin)));
        assert!(session.is_open());
    }

    #[test]
    fn closed_sessions_ignore_everything() {
        let mut session = ClientSession::new();
        session.handle_server_event(snapshot_event(Some(Role::Admin)));
        session.close();

        session.handle_server_event(snapshot_event(Some(Role::Admin)));
        assert!(!session.is_open());
        assert!(session.handle_local_command(BoardCommand::Clear).is_none());
    }
}
