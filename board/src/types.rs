use std::fmt;

use serde::{Deserialize, Serialize};

pub type ConnectionId = u16;

/// Authorization level bound to a connection for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    General,
    Admin,
}

impl Role {
    pub fn satisfies(self, required: Role) -> bool {
        match required {
            Role::General => true,
            Role::Admin => self == Role::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::General => write!(f, "general"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// One sample point of a stroke, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_satisfies_both_levels() {
        assert!(Role::Admin.satisfies(Role::General));
        assert!(Role::Admin.satisfies(Role::Admin));
    }

    #[test]
    fn general_does_not_satisfy_admin() {
        assert!(Role::General.satisfies(Role::General));
        assert!(!Role::General.satisfies(Role::Admin));
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::General).unwrap(), "\"general\"");
    }
}
