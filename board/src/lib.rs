pub extern crate serde;
pub extern crate serde_json;
pub extern crate uuid;

mod access;
mod client_session;
mod document;
mod message;
mod replica;
mod types;

pub use access::{permits, required_role};
pub use client_session::{ClientSession, RECONNECT_DELAY};
pub use document::{BoardDocument, GridConfig, Stroke, StrokeTool, Token};
pub use message::{BoardCommand, BoardEvent};
pub use replica::ClientReplicaDocument;
pub use types::{ConnectionId, Point, Role};
