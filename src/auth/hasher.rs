use sha1::{Digest, Sha1};

/// One-way password transform compared against the configured admin digest.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, secret: &str) -> String;
}

/// SHA-1 over `secret || salt`, rendered as lowercase hex.
pub fn hash(secret: &str, salt: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(secret.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone)]
pub struct Sha1Hasher {
    salt: String,
}

impl Sha1Hasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl PasswordHasher for Sha1Hasher {
    fn hash(&self, secret: &str) -> String {
        hash(secret, &self.salt)
    }
}
