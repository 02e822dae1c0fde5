use crate::message::BoardCommand;
use crate::types::Role;

/// Minimal role required for each operation. Drawing and token handling
/// are open to every authenticated viewer; scene-level settings are
/// reserved for the admin.
pub fn required_role(command: &BoardCommand) -> Role {
    match command {
        BoardCommand::Draw { .. }
        | BoardCommand::Clear
        | BoardCommand::TokenCreate { .. }
        | BoardCommand::TokenMove { .. }
        | BoardCommand::TokenDelete { .. } => Role::General,
        BoardCommand::Background { .. }
        | BoardCommand::GridSize { .. }
        | BoardCommand::GridToggle { .. } => Role::Admin,
    }
}

/// A connection without a resolvable session has no role and is
/// permitted nothing.
pub fn permits(role: Option<Role>, command: &BoardCommand) -> bool {
    role.map_or(false, |role| role.satisfies(required_role(command)))
}
