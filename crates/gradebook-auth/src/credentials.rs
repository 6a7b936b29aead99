//! Password verification and role lookup behind pluggable stores.

use std::future::Future;
use std::sync::LazyLock;

use gradebook_core::{hash_password, verify_password};

use crate::claims::Role;

/// Source of stored password hashes, keyed by email.
pub trait CredentialStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The bcrypt hash stored for `email`, or `None` if nobody has that email.
    fn password_hash(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}

/// Source of the active roles a person holds.
pub trait RoleDirectory {
    type Error: std::error::Error + Send + Sync + 'static;

    fn roles_of(&self, email: &str) -> impl Future<Output = Result<Vec<Role>, Self::Error>> + Send;
}

// Compared against when the email is unknown so both failure paths cost one bcrypt run.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("gradebook-timing-equalizer").ok());

/// Checks `secret` against the hash stored for `email`.
///
/// Returns `false` for an unknown email, a wrong secret, a corrupt stored hash
/// and a failed lookup alike. The cause is logged, never returned.
pub async fn verify_credentials<S>(store: &S, email: &str, secret: &str) -> bool
where
    S: CredentialStore + Sync,
{
    let stored = match store.password_hash(email).await {
        Ok(stored) => stored,
        Err(err) => {
            tracing::error!(error = %err, "credential lookup failed");
            return false;
        }
    };

    let Some(hash) = stored else {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            let _ = verify_password(secret, dummy);
        }
        tracing::debug!("login attempt for unknown email");
        return false;
    };

    match verify_password(secret, &hash) {
        Ok(true) => true,
        Ok(false) => {
            tracing::debug!("password mismatch");
            false
        }
        Err(err) => {
            tracing::error!(error = ?err.error, "stored password hash is unreadable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fmt;

    #[derive(Debug)]
    struct StoreDown;

    impl fmt::Display for StoreDown {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("store down")
        }
    }

    impl std::error::Error for StoreDown {}

    struct FakeStore {
        hashes: HashMap<String, String>,
        down: bool,
    }

    impl FakeStore {
        fn with(email: &str, password: &str) -> Self {
            let mut hashes = HashMap::new();
            hashes.insert(email.to_string(), bcrypt::hash(password, 4).unwrap());
            Self { hashes, down: false }
        }
    }

    impl CredentialStore for FakeStore {
        type Error = StoreDown;

        async fn password_hash(&self, email: &str) -> Result<Option<String>, StoreDown> {
            if self.down {
                return Err(StoreDown);
            }
            Ok(self.hashes.get(email).cloned())
        }
    }

    #[tokio::test]
    async fn test_correct_password() {
        let store = FakeStore::with("ada@example.com", "correct horse");
        assert!(verify_credentials(&store, "ada@example.com", "correct horse").await);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let store = FakeStore::with("ada@example.com", "correct horse");
        assert!(!verify_credentials(&store, "ada@example.com", "battery staple").await);
    }

    #[tokio::test]
    async fn test_unknown_email() {
        let store = FakeStore::with("ada@example.com", "correct horse");
        assert!(!verify_credentials(&store, "eve@example.com", "correct horse").await);
    }

    #[tokio::test]
    async fn test_corrupt_hash() {
        let mut store = FakeStore::with("ada@example.com", "correct horse");
        store
            .hashes
            .insert("ada@example.com".to_string(), "plaintext".to_string());
        assert!(!verify_credentials(&store, "ada@example.com", "plaintext").await);
    }

    #[tokio::test]
    async fn test_store_failure() {
        let mut store = FakeStore::with("ada@example.com", "correct horse");
        store.down = true;
        assert!(!verify_credentials(&store, "ada@example.com", "correct horse").await);
    }
}
