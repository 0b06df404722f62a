//! The session store.
//!
//! Single source of truth for the bearer token and verified profile.
//! Resource slices borrow the token through the `TokenProvider`
//! capability; only the store's own mutating operations (`login`,
//! `signup`, `verify_profile`, `logout`) write session state or touch
//! durable storage.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::json;

use crate::http::decode;
use crate::http::{ApiFailure, ApiRequest, FailureKind, HttpMethod, RequestOutcome, Transport};

use super::persistence::{SessionFile, StoredSession};
use super::types::{Credentials, Profile, SignupRequest};
use super::TokenProvider;

const LOGIN_PATH: &str = "/user/login";
const SIGNUP_PATH: &str = "/user/signup";
const PROFILE_PATH: &str = "/user/profile";

/// Verification state of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No verification activity; also the state after an explicit
    /// logout.
    #[default]
    Idle,
    /// A profile round trip is in flight.
    Verifying,
    /// The token was accepted by the remote at least once.
    Verified,
    /// The remote rejected the credential and the session was cleared.
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct SessionInner {
    token: Option<String>,
    user: Option<Profile>,
    status: SessionStatus,
}

/// Thread-safe session store with durable persistence.
///
/// Cheap to clone; all clones share the same state. Reads hand out
/// cloned snapshots, so no caller can observe a partial transition.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
    storage: SessionFile,
    transport: Arc<dyn Transport>,
}

impl SessionStore {
    /// Create the store, pre-populating token and profile from durable
    /// storage without a network round trip. An unreadable session file
    /// is discarded rather than surfaced.
    pub fn new(transport: Arc<dyn Transport>, storage: SessionFile) -> Self {
        let stored = match storage.load() {
            Ok(stored) => stored,
            Err(source) => {
                tracing::warn!(error = %source, "Discarding unreadable session file");
                StoredSession::default()
            }
        };

        let inner = SessionInner {
            token: stored.token,
            user: stored.profile,
            status: SessionStatus::Idle,
        };

        Self {
            inner: Arc::new(RwLock::new(inner)),
            storage,
            transport,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn user(&self) -> Option<Profile> {
        self.inner.read().user.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.read().status
    }

    /// Authenticate against the remote API.
    ///
    /// Empty credentials are rejected locally without a network call.
    /// On success the token is stored and persisted immediately; on
    /// failure any prior session is left untouched.
    pub async fn login(&self, credentials: &Credentials) -> RequestOutcome {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return RequestOutcome::Failure(ApiFailure::validation(
                "Email and password are required",
            ));
        }

        let request = ApiRequest::new(HttpMethod::Post, LOGIN_PATH).json(json!({
            "email": credentials.email,
            "password": credentials.password,
        }));

        let outcome = self.transport.send(request).await;
        self.adopt_token(outcome)
    }

    /// Register a new account. Folds exactly like [`login`].
    ///
    /// [`login`]: SessionStore::login
    pub async fn signup(&self, signup: &SignupRequest) -> RequestOutcome {
        if signup.name.trim().is_empty()
            || signup.email.trim().is_empty()
            || signup.password.is_empty()
        {
            return RequestOutcome::Failure(ApiFailure::validation(
                "Name, email and password are required",
            ));
        }

        let request = ApiRequest::new(HttpMethod::Post, SIGNUP_PATH).json(json!({
            "name": signup.name,
            "email": signup.email,
            "password": signup.password,
        }));

        let outcome = self.transport.send(request).await;
        self.adopt_token(outcome)
    }

    fn adopt_token(&self, outcome: RequestOutcome) -> RequestOutcome {
        let RequestOutcome::Success { payload } = &outcome else {
            return outcome;
        };

        match decode::decode_token(payload) {
            Ok(token) => {
                {
                    let mut inner = self.inner.write();
                    inner.token = Some(token);
                    // Verified pending a profile check; the profile
                    // round trip fills in `user`.
                    inner.status = SessionStatus::Verified;
                }
                self.persist();
                tracing::info!("Session token stored");
                outcome
            }
            Err(source) => {
                tracing::warn!(error = %source, "Auth response carried no token");
                RequestOutcome::Failure(ApiFailure::parse("Auth response carried no token"))
            }
        }
    }

    /// Confirm the stored token against the profile endpoint.
    ///
    /// With no token present this fails locally with `Unauthorized` and
    /// performs zero network calls. A remote `Unauthorized` clears the
    /// entire session and purges durable storage (forced logout); any
    /// other failure leaves the session as it was.
    pub async fn verify_profile(&self) -> RequestOutcome {
        let Some(token) = self.token() else {
            return RequestOutcome::Failure(ApiFailure::unauthorized("No session token present"));
        };

        let previous = {
            let mut inner = self.inner.write();
            let previous = inner.status;
            inner.status = SessionStatus::Verifying;
            previous
        };

        let request = ApiRequest::new(HttpMethod::Get, PROFILE_PATH).bearer(Some(token));
        let outcome = self.transport.send(request).await;

        match &outcome {
            RequestOutcome::Success { payload } => match decode::decode_item::<Profile>(payload) {
                Ok(profile) => {
                    {
                        let mut inner = self.inner.write();
                        inner.user = Some(profile);
                        inner.status = SessionStatus::Verified;
                    }
                    self.persist();
                    tracing::info!("Profile verified");
                    outcome
                }
                Err(source) => {
                    self.inner.write().status = previous;
                    tracing::warn!(error = %source, "Unrecognized profile payload");
                    RequestOutcome::Failure(ApiFailure::parse(format!(
                        "Unrecognized profile payload: {source}"
                    )))
                }
            },
            RequestOutcome::Failure(failure) if failure.kind == FailureKind::Unauthorized => {
                tracing::warn!("Stored token rejected, clearing session");
                self.invalidate();
                outcome
            }
            RequestOutcome::Failure(_) => {
                self.inner.write().status = previous;
                outcome
            }
        }
    }

    /// Clear the session and purge durable storage. Idempotent.
    pub fn logout(&self) {
        *self.inner.write() = SessionInner::default();
        self.purge();
        tracing::info!("Session cleared");
    }

    /// Forced logout on an invalid credential: like [`logout`], but the
    /// status records the rejection so the view layer can route to a
    /// session-expired screen instead of a plain login screen.
    ///
    /// [`logout`]: SessionStore::logout
    pub fn invalidate(&self) {
        *self.inner.write() = SessionInner {
            status: SessionStatus::Invalid,
            ..SessionInner::default()
        };
        self.purge();
    }

    fn persist(&self) {
        let stored = {
            let inner = self.inner.read();
            StoredSession {
                token: inner.token.clone(),
                profile: inner.user.clone(),
            }
        };
        if let Err(source) = self.storage.save(&stored) {
            tracing::warn!(error = %source, "Failed to persist session");
        }
    }

    fn purge(&self) {
        if let Err(source) = self.storage.clear() {
            tracing::warn!(error = %source, "Failed to clear session storage");
        }
    }
}

impl TokenProvider for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}
