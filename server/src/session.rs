use std::collections::HashMap;
use std::sync::RwLock;

use board::uuid::Uuid;
use board::Role;

/// Process-wide login sessions. A token maps to exactly one role, fixed
/// for its lifetime. Entries are never expired server-side; the cookie's
/// Max-Age is the only client-side bound, and the map is reclaimed on
/// process restart.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Role>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn create_session(&self, role: Role) -> String {
        let token = Uuid::new_v4().to_simple().to_string();
        self.sessions
            .write()
            .expect("session registry lock poisoned")
            .insert(token.clone(), role);
        token
    }

    pub fn resolve(&self, token: &str) -> Option<Role> {
        self.sessions
            .read()
            .expect("session registry lock poisoned")
            .get(token)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sessions_resolve_to_their_role() {
        let registry = SessionRegistry::new();
        let token = registry.create_session(Role::Admin);
        assert_eq!(registry.resolve(&token), Some(Role::Admin));
    }

    #[test]
    fn unknown_tokens_resolve_to_nothing() {
        let registry = SessionRegistry::new();
        registry.create_session(Role::General);
        assert_eq!(registry.resolve("no-such-token"), None);
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let registry = SessionRegistry::new();
        let first = registry.create_session(Role::General);
        let second = registry.create_session(Role::General);
        assert_ne!(first, second);
    }
}
