//! Deterministic credential hashing for tests
//!
//! The domain core treats the hash as opaque, so tests use a reversible
//! marker scheme instead of a real password hash.

use domain_accounts::CredentialHasher;

/// Credential hasher stand-in with no work factor
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, plaintext: &str) -> String {
        format!("plain${plaintext}")
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        hash.strip_prefix("plain$") == Some(plaintext)
    }
}
