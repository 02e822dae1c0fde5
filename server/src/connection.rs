use actix::{Actor, ActorContext, AsyncContext, Handler, Message, Running, StreamHandler};
use actix_web::{web, Error, HttpMessage, HttpRequest, HttpResponse};
use actix_web_actors::ws;

use board::{serde_json, BoardCommand, BoardEvent, ConnectionId, Role};

use crate::registry::ConnectionTx;
use crate::server::ServerTx;
use crate::session::SessionRegistry;

#[derive(Debug)]
pub enum ConnectionCommand {
    Connect {
        tx: ConnectionTx,
        role: Option<Role>,
    },
    Disconnect {
        from: ConnectionId,
    },
    Board {
        from: ConnectionId,
        command: BoardCommand,
    },
}

#[derive(Debug)]
pub enum ConnectionEvent {
    Connected { connection_id: ConnectionId },
    Board(BoardEvent),
}

#[derive(Message)]
#[rtype(result = "()")]
struct ConnectionActorMessage(ConnectionEvent);

enum ConnectionState {
    Connecting,
    Open(ConnectionId),
    Closed,
}

/// One websocket viewer. The role is resolved from the session cookie
/// before the actor starts and never changes afterwards.
struct ConnectionActor {
    state: ConnectionState,
    srv_tx: ServerTx,
    role: Option<Role>,
}

impl Actor for ConnectionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<ConnectionEvent>(32);

        self.srv_tx
            .try_send(ConnectionCommand::Connect {
                tx,
                role: self.role,
            })
            .expect("server must not be closed yet");

        let addr = ctx.address().recipient();

        tokio::spawn(async move {
            let addr = addr;
            log::debug!("connection event pump - started");
            while let Some(msg) = rx.recv().await {
                if addr.try_send(ConnectionActorMessage(msg)).is_err() {
                    break;
                }
            }
            log::debug!("connection event pump - terminated");
        });
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        if let ConnectionState::Open(from) = self.state {
            // Teardown never blocks; a full buffer only loses the
            // notification, which the registry tolerates.
            if let Err(err) = self.srv_tx.try_send(ConnectionCommand::Disconnect { from }) {
                log::warn!("Could not notify disconnect of connection {}: {}", from, err);
            }
        }

        Running::Stop
    }
}

/// Ingress
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ConnectionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Text(text)) => {
                if let ConnectionState::Open(from) = self.state {
                    // A bad frame is logged and dropped; the connection
                    // stays open.
                    match serde_json::from_str::<BoardCommand>(&text) {
                        Ok(command) => {
                            log::debug!("Ingress {:?}", command);
                            if let Err(err) =
                                self.srv_tx.try_send(ConnectionCommand::Board { from, command })
                            {
                                log::warn!(
                                    "Dropping command from connection {}: {}",
                                    from,
                                    err
                                );
                            }
                        }
                        Err(err) => log::warn!("Dropping malformed message: {}", err),
                    }
                }
            }
            Ok(ws::Message::Close(_)) => {
                if let ConnectionState::Open(from) = self.state {
                    if let Err(err) = self.srv_tx.try_send(ConnectionCommand::Disconnect { from })
                    {
                        log::warn!(
                            "Could not notify disconnect of connection {}: {}",
                            from,
                            err
                        );
                    }
                    self.state = ConnectionState::Closed;
                }
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// Egress
impl Handler<ConnectionActorMessage> for ConnectionActor {
    type Result = ();

    fn handle(
        &mut self,
        msg: ConnectionActorMessage,
        ctx: &mut ws::WebsocketContext<Self>,
    ) -> Self::Result {
        let ConnectionActorMessage(event) = msg;
        match event {
            ConnectionEvent::Connected { connection_id } => {
                log::debug!("Connection {} bound, role {:?}", connection_id, self.role);
                self.state = ConnectionState::Open(connection_id);
            }
            ConnectionEvent::Board(event) => {
                let serialized = serde_json::to_string(&event).expect("must succeed");
                ctx.text(serialized);
            }
        }
    }
}

/// Websocket entry point. The session cookie is read here, once, and the
/// resolved role (or none) is bound to the connection for its lifetime.
/// A connection without a resolvable session still joins as a viewer but
/// holds no role.
pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    srv_tx: web::Data<ServerTx>,
    sessions: web::Data<SessionRegistry>,
) -> Result<HttpResponse, Error> {
    let role = req
        .cookie("session")
        .and_then(|cookie| sessions.resolve(cookie.value()));

    ws::start(
        ConnectionActor {
            srv_tx: srv_tx.get_ref().clone(),
            state: ConnectionState::Connecting,
            role,
        },
        &req,
        stream,
    )
}
