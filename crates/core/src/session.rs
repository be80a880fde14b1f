//! Session token persistence

use std::fmt;
use std::sync::{Arc, RwLock};

/// Persistent storage for the raw access token
///
/// Implementations hold at most one token and perform no expiry or shape
/// checks. Storage failures are the implementation's to log; callers only
/// ever observe "token present" or "token absent".
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn get(&self) -> Option<String>;

    /// Replace the stored token
    fn save(&self, token: &str);

    /// Remove the stored token
    fn clear(&self);
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, token: &str) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(token.to_string());
    }

    fn clear(&self) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = None;
    }
}

/// Shared handle to the token store
///
/// The API client reads the token through the session on every request and
/// the page runtime saves or clears it, so both always agree on whether a
/// session is active.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh [`MemoryTokenStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Current token; an empty stored value counts as no token
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    pub fn save(&self, token: &str) {
        tracing::debug!("persisting session token");
        self.store.save(token);
    }

    pub fn clear(&self) {
        tracing::debug!("clearing session token");
        self.store.clear();
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.is_active())
            .finish()
    }
}
