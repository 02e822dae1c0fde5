use board::Role;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
pub const DEFAULT_GENERAL_PASSWORD: &str = "password";

/// The login secrets this process accepts. Each slot holds a bcrypt
/// hash; an unset slot falls back to the documented development default
/// password, which is the only case where plaintext equality is used.
pub struct Credentials {
    admin_password_hash: Option<String>,
    general_password_hash: Option<String>,
}

impl Credentials {
    pub fn new(
        admin_password_hash: Option<String>,
        general_password_hash: Option<String>,
    ) -> Self {
        Self {
            admin_password_hash,
            general_password_hash,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            env_hash("ADMIN_PASSWORD_HASH"),
            env_hash("GENERAL_PASSWORD_HASH"),
        )
    }

    pub fn admin_hash_configured(&self) -> bool {
        self.admin_password_hash.is_some()
    }

    pub fn general_hash_configured(&self) -> bool {
        self.general_password_hash.is_some()
    }

    /// Admin credentials are checked first; a secret that matches
    /// neither class yields no role.
    pub fn resolve_role(&self, password: &str) -> Option<Role> {
        if verify_secret(
            password,
            self.admin_password_hash.as_deref(),
            DEFAULT_ADMIN_PASSWORD,
        ) {
            Some(Role::Admin)
        } else if verify_secret(
            password,
            self.general_password_hash.as_deref(),
            DEFAULT_GENERAL_PASSWORD,
        ) {
            Some(Role::General)
        } else {
            None
        }
    }
}

fn env_hash(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn verify_secret(password: &str, hash: Option<&str>, dev_default: &str) -> bool {
    match hash {
        Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
        None => password == dev_default,
    }
}
