//! Key-pair capability consumed by key-scoped queries.
//!
//! Key generation, signing and hash derivation live outside this crate; the
//! client only needs the formatted account hash.

/// Anything that can name the account a key pair controls.
pub trait KeyPair: Send + Sync {
    /// Deterministic account hash for the public key, formatted as a global
    /// state key (`account-hash-<hex>`).
    fn account_hash(&self) -> String;
}

impl<K: KeyPair + ?Sized> KeyPair for &K {
    fn account_hash(&self) -> String {
        (**self).account_hash()
    }
}
