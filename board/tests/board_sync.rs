use board::{
    BoardCommand, BoardDocument, BoardEvent, ClientSession, Point, Role, Stroke, StrokeTool, Token,
    RECONNECT_DELAY,
};

fn hero() -> Token {
    Token {
        id: "t1".into(),
        x: 100.0,
        y: 100.0,
        name: "Hero".into(),
        color: "#ff0000".into(),
    }
}

fn stroke() -> Stroke {
    Stroke {
        tool: StrokeTool::Pen,
        color: "#000000".into(),
        points: vec![Point { x: 1.0, y: 1.0 }, Point { x: 2.0, y: 3.0 }],
    }
}

fn open(document: &BoardDocument, role: Role) -> ClientSession {
    let mut session = ClientSession::new();
    session.handle_server_event(BoardEvent::State {
        data: document.snapshot(),
        role: Some(role),
    });
    session
}

#[test]
fn viewers_converge_on_a_token_creation() {
    let mut document = BoardDocument::new();
    let mut alice = open(&document, Role::General);
    let mut bob = open(&document, Role::General);

    let command = alice
        .handle_local_command(BoardCommand::TokenCreate { token: hero() })
        .expect("session is open");
    // Optimistic: visible to Alice before the server has seen it.
    assert!(alice.view().unwrap().tokens().contains_key("t1"));

    let delta = document.apply(command).expect("create mutates the board");
    bob.handle_server_event(delta);

    assert_eq!(alice.view().unwrap(), &document);
    assert_eq!(bob.view().unwrap(), &document);
}

#[test]
fn observers_settle_on_the_last_processed_move() {
    let mut document = BoardDocument::new();
    document.apply(BoardCommand::TokenCreate { token: hero() });

    let mut alice = open(&document, Role::General);
    let mut bob = open(&document, Role::General);
    let mut carol = open(&document, Role::General);

    let move_a = alice
        .handle_local_command(BoardCommand::TokenMove {
            id: "t1".into(),
            x: 10.0,
            y: 10.0,
        })
        .unwrap();
    let move_b = bob
        .handle_local_command(BoardCommand::TokenMove {
            id: "t1".into(),
            x: 20.0,
            y: 20.0,
        })
        .unwrap();

    // The server processes Alice's move first, Bob's second, fanning each
    // delta out to everyone but its originator.
    let delta_a = document.apply(move_a).unwrap();
    bob.handle_server_event(delta_a.clone());
    carol.handle_server_event(delta_a);
    let delta_b = document.apply(move_b).unwrap();
    alice.handle_server_event(delta_b.clone());
    carol.handle_server_event(delta_b);

    assert_eq!(document.tokens()["t1"].x, 20.0);
    assert_eq!(carol.view().unwrap(), &document);
    assert_eq!(alice.view().unwrap(), &document);
}

#[test]
fn reconnect_snapshot_resolves_missed_deltas() {
    let mut document = BoardDocument::new();
    let mut alice = open(&document, Role::General);

    assert_eq!(alice.handle_disconnect(), RECONNECT_DELAY);
    assert!(alice.view().is_none());

    // The board moves on while Alice is away.
    document.apply(BoardCommand::Draw { path: stroke() });
    document.apply(BoardCommand::TokenCreate { token: hero() });

    alice.handle_server_event(BoardEvent::State {
        data: document.snapshot(),
        role: Some(Role::General),
    });

    assert_eq!(alice.view().unwrap(), &document);
    assert_eq!(alice.role(), Some(Role::General));
}
