use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::session::Identity;
use crate::store::SessionStore;
use crate::utils;

pub const BOTH_FIELDS_MESSAGE: &str = "Both fields are required.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

/// Accounts the panel accepts.
pub const DEFAULT_USERS: &[(&str, &str)] = &[
    ("user1", "password1"),
    ("user2", "password2"),
    ("admin", "admin123"),
];

#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug)]
pub struct CredentialStore {
    hashes: HashMap<String, String>,
}

impl CredentialStore {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> AppResult<Self> {
        // Light parameters: the table is rebuilt on every start-up.
        let params = Params::new(Params::MIN_M_COST * 128, 1, 1, None)
            .map_err(|e| AppError::Configuration(format!("Invalid hash parameters: {}", e)))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut hashes = HashMap::with_capacity(pairs.len());
        for (username, password) in pairs {
            let salt = SaltString::generate(&mut rand::thread_rng());
            let hash = argon2
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| AppError::Configuration("Hashing error".to_string()))?
                .to_string();
            hashes.insert(username.to_string(), hash);
        }
        Ok(Self { hashes })
    }

    pub fn with_defaults() -> AppResult<Self> {
        Self::from_pairs(DEFAULT_USERS)
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(stored) = self.hashes.get(username) else {
            return false;
        };
        let Ok(parsed) = PasswordHash::new(stored) else {
            log::error!("Stored hash for {} is unreadable", username);
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

pub struct AuthGate {
    credentials: CredentialStore,
    delay: Duration,
    jwt_secret: String,
    session_ttl_hours: i64,
    in_flight: Mutex<HashSet<String>>,
}

impl AuthGate {
    pub fn new(
        credentials: CredentialStore,
        delay: Duration,
        jwt_secret: impl Into<String>,
        session_ttl_hours: i64,
    ) -> Self {
        Self {
            credentials,
            delay,
            jwt_secret: jwt_secret.into(),
            session_ttl_hours,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Checks the pair and, on success, makes it the current session.
    ///
    /// A second submission for the same username while the first one is
    /// still waiting out the delay is rejected. Dropping the returned future
    /// during the delay leaves the session store untouched.
    pub async fn authenticate(
        &self,
        request: &LoginRequest,
        sessions: &SessionStore,
    ) -> AppResult<Identity> {
        utils::validation::validate_payload(request, BOTH_FIELDS_MESSAGE)?;

        let _busy = InFlight::acquire(self, &request.username)?;

        let accepted = self
            .credentials
            .verify(&request.username, &request.password);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if !accepted {
            log::warn!("Failed login for {}", request.username);
            return Err(AppError::InvalidCredentials(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ));
        }

        let session = sessions.start(&request.username).await;
        let token =
            utils::jwt::generate_token(&session, &self.jwt_secret, self.session_ttl_hours)
                .map_err(|_| AppError::InternalServerError("Token generation error".to_string()))?;

        log::info!("{} logged in", session.username);
        Ok(Identity {
            username: session.username,
            token,
        })
    }

    #[cfg(test)]
    fn is_busy(&self, username: &str) -> bool {
        self.in_flight
            .lock()
            .map(|set| set.contains(username))
            .unwrap_or(false)
    }
}

/// Marks a username as mid-login until dropped.
struct InFlight<'a> {
    gate: &'a AuthGate,
    username: String,
}

impl<'a> InFlight<'a> {
    fn acquire(gate: &'a AuthGate, username: &str) -> AppResult<Self> {
        let mut in_flight = gate
            .in_flight
            .lock()
            .map_err(|e| AppError::InternalServerError(format!("Lock poisoned: {}", e)))?;
        if !in_flight.insert(username.to_string()) {
            return Err(AppError::Conflict("Login already in progress".to_string()));
        }
        Ok(Self {
            gate,
            username: username.to_string(),
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.gate.in_flight.lock() {
            in_flight.remove(&self.username);
        }
    }
}
