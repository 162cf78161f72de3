// src/shared/http/token_store.rs
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Bearer tokens shared between the auth service (writer) and the HTTP
/// client (reader). Lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<Tokens>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: Tokens) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(tokens))),
        }
    }

    pub fn set(&self, tokens: Tokens) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(tokens);
    }

    pub fn clear(&self) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = None;
    }

    pub fn get(&self) -> Option<Tokens> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.get().map(|t| t.access_token)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.get().and_then(|t| t.refresh_token)
    }
}
