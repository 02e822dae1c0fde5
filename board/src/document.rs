use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::message::{BoardCommand, BoardEvent};
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeTool {
    Pen,
    Eraser,
}

/// One freehand path. Append-only once stored; the append order is the
/// draw order for replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub tool: StrokeTool,
    pub color: String,
    pub points: Vec<Point>,
}

/// A positioned marker. The id is assigned by the originating client;
/// the document only enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: u32,
    pub visible: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 50,
            visible: true,
        }
    }
}

/// The canonical shared scene. Exactly one instance exists per server
/// process, owned by the synchronization loop; clients hold replicas,
/// never writable copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    tokens: HashMap<String, Token>,
    drawings: Vec<Stroke>,
    background: Option<String>,
    grid: GridConfig,
}

impl BoardDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full copy sent to a connection on join. There is no incremental
    /// catch-up log; this is the only late-join mechanism.
    pub fn snapshot(&self) -> BoardDocument {
        self.clone()
    }

    pub fn tokens(&self) -> &HashMap<String, Token> {
        &self.tokens
    }

    pub fn drawings(&self) -> &[Stroke] {
        &self.drawings
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Applies one atomic transition and returns the delta to fan out,
    /// or `None` when the command left the document unchanged (duplicate
    /// create, unknown id, invalid grid size).
    pub fn apply(&mut self, command: BoardCommand) -> Option<BoardEvent> {
        match command {
            BoardCommand::Draw { path } => {
                self.drawings.push(path.clone());
                Some(BoardEvent::Draw { path })
            }
            BoardCommand::Clear => {
                self.drawings.clear();
                Some(BoardEvent::Clear)
            }
            BoardCommand::TokenCreate { token } => {
                if self.tokens.contains_key(&token.id) {
                    return None;
                }
                self.tokens.insert(token.id.clone(), token.clone());
                Some(BoardEvent::TokenCreate { token })
            }
            BoardCommand::TokenMove { id, x, y } => match self.tokens.get_mut(&id) {
                Some(token) => {
                    token.x = x;
                    token.y = y;
                    Some(BoardEvent::TokenMove { id, x, y })
                }
                None => None,
            },
            BoardCommand::TokenDelete { id } => {
                if self.tokens.remove(&id).is_some() {
                    Some(BoardEvent::TokenDelete { id })
                } else {
                    None
                }
            }
            BoardCommand::Background { image } => {
                self.background = image.clone();
                Some(BoardEvent::Background { image })
            }
            BoardCommand::GridSize { size } => {
                if size == 0 {
                    log::warn!("Ignoring grid size of zero");
                    return None;
                }
                self.grid.size = size;
                Some(BoardEvent::GridSize { size })
            }
            BoardCommand::GridToggle { visible } => {
                self.grid.visible = visible;
                Some(BoardEvent::GridToggle { visible })
            }
        }
    }
}
