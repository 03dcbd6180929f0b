//! Admin authentication: password digests and bearer tokens.

pub mod hasher;
pub mod token;

pub use hasher::{hash, PasswordHasher, Sha1Hasher};
pub use token::{AuthError, AuthService, Claims};

/// The single administrative identity allowed to mutate resources.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    /// Hex digest of the admin password, as produced by [`hash`].
    pub password_hash: String,
}
