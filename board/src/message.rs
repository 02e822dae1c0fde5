use serde::{Deserialize, Serialize};

use crate::document::{BoardDocument, Stroke, Token};
use crate::types::Role;

/// One mutation request from a viewer. Messages are JSON objects tagged
/// by a `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BoardCommand {
    Draw { path: Stroke },
    Clear,
    TokenCreate { token: Token },
    TokenMove { id: String, x: f64, y: f64 },
    TokenDelete { id: String },
    Background { image: Option<String> },
    GridSize { size: u32 },
    GridToggle { visible: bool },
}

/// Server egress. `State` carries the full document plus the receiving
/// connection's role; the remaining variants are deltas mirroring
/// `BoardCommand` and are fanned out to every connection except the
/// originator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BoardEvent {
    State {
        data: BoardDocument,
        role: Option<Role>,
    },
    Draw {
        path: Stroke,
    },
    Clear,
    TokenCreate {
        token: Token,
    },
    TokenMove {
        id: String,
        x: f64,
        y: f64,
    },
    TokenDelete {
        id: String,
    },
    Background {
        image: Option<String>,
    },
    GridSize {
        size: u32,
    },
    GridToggle {
        visible: bool,
    },
}

impl BoardEvent {
    /// A delta maps back to the command it echoes, so replicas can apply
    /// remote changes through the same document code path. `State` has no
    /// command counterpart.
    pub fn into_command(self) -> Option<BoardCommand> {
        match self {
            BoardEvent::State { .. } => None,
            BoardEvent::Draw { path } => Some(BoardCommand::Draw { path }),
            BoardEvent::Clear => Some(BoardCommand::Clear),
            BoardEvent::TokenCreate { token } => Some(BoardCommand::TokenCreate { token }),
            BoardEvent::TokenMove { id, x, y } => Some(BoardCommand::TokenMove { id, x, y }),
            BoardEvent::TokenDelete { id } => Some(BoardCommand::TokenDelete { id }),
            BoardEvent::Background { image } => Some(BoardCommand::Background { image }),
            BoardEvent::GridSize { size } => Some(BoardCommand::GridSize { size }),
            BoardEvent::GridToggle { visible } => Some(BoardCommand::GridToggle { visible }),
        }
    }
}
