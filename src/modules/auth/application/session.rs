// src/modules/auth/application/session.rs
use std::sync::{Arc, RwLock};

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::modules::auth::application::domain::entities::{AuthSession, UserAccount};
use crate::shared::http::{TokenStore, Tokens};

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

/// Reads the `exp` claim of a JWT. The signature is not checked: the client
/// only needs to know whether sending the token is worth it.
pub fn token_expiry(token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| data.claims.exp)
}

/// In-memory login state. Shares its `TokenStore` with the `ApiClient`, so
/// storing a session authorizes every later request.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: TokenStore,
    user: Arc<RwLock<Option<UserAccount>>>,
}

impl SessionStore {
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            tokens,
            user: Arc::new(RwLock::new(None)),
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn store(&self, session: &AuthSession) {
        // A refresh response may omit the refresh token; keep the old one then.
        let refresh_token = session
            .refresh_token
            .clone()
            .or_else(|| self.tokens.refresh_token());

        self.tokens.set(Tokens {
            access_token: session.access_token.clone(),
            refresh_token,
        });
        if let Some(user) = &session.user {
            self.set_user(Some(user.clone()));
        }
    }

    pub fn set_user(&self, user: Option<UserAccount>) {
        match self.user.write() {
            Ok(mut guard) => *guard = user,
            Err(poisoned) => *poisoned.into_inner() = user,
        }
    }

    pub fn user(&self) -> Option<UserAccount> {
        match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        self.tokens.clear();
        self.set_user(None);
    }

    /// A token is held and, when its expiry is readable, it has not passed.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now().timestamp())
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        match self.tokens.access_token() {
            Some(token) => token_expiry(&token).map_or(true, |exp| exp > now),
            None => false,
        }
    }
}
