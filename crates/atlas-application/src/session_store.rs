use atlas_core::auth::{BearerCredential, LoginResponse};
use atlas_core::backend::AtlasBackend;
use atlas_core::error::Result;
use atlas_core::session::{KeyValueStore, Restoration, Session, TOKEN_KEY, USER_KEY};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct SessionState {
    session: Session,
    restoration: Restoration,
}

/// Single source of truth for who is logged in.
///
/// `SessionStore` is responsible for:
/// - Logging in through the backend and persisting the token and username
/// - Logging out (purely local)
/// - Restoring the persisted session once at startup
/// - Handing out the bearer credential for protected requests
///
/// The token lives in the injected [`KeyValueStore`]; the in-memory
/// [`Session`] mirrors it for views that need the username.
pub struct SessionStore {
    /// Persistent storage the session keys are mirrored into
    storage: Arc<dyn KeyValueStore>,
    /// Backend used for login
    backend: Arc<dyn AtlasBackend>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Creates a store in the `Pending` restoration state.
    pub fn new(storage: Arc<dyn KeyValueStore>, backend: Arc<dyn AtlasBackend>) -> Self {
        Self {
            storage,
            backend,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// The backend this store logs in through.
    pub fn backend(&self) -> &Arc<dyn AtlasBackend> {
        &self.backend
    }

    /// Restores the persisted session. Run once at startup.
    ///
    /// Both keys present and non-empty → authenticated session. Anything
    /// less is an incomplete session: both keys are removed and the session
    /// stays anonymous. Restoration is marked complete even when reading
    /// storage fails.
    ///
    /// # Errors
    ///
    /// Returns an error if storage access fails.
    pub async fn restore_session(&self) -> Result<Session> {
        let result = self.read_persisted();
        let mut state = self.state.write().await;
        state.restoration = Restoration::Complete;

        let session = match result? {
            (Some(token), Some(username)) => {
                tracing::info!("Restored session for user '{}'", username);
                Session::authenticated(token, username)
            }
            (None, None) => {
                tracing::debug!("No persisted session");
                // Drops keys stored with empty values.
                self.clear_persisted()?;
                Session::anonymous()
            }
            _ => {
                tracing::warn!("Discarding incomplete persisted session");
                self.clear_persisted()?;
                Session::anonymous()
            }
        };

        state.session = session.clone();
        Ok(session)
    }

    /// Reads both keys, treating empty values as absent.
    fn read_persisted(&self) -> Result<(Option<String>, Option<String>)> {
        Ok((self.read_key(TOKEN_KEY)?, self.read_key(USER_KEY)?))
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get(key)?.filter(|value| !value.is_empty()))
    }

    fn clear_persisted(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)
    }

    /// Logs in and persists the session.
    ///
    /// On success the token is stored under `atlas_token` and `username`
    /// under `atlas_user`, and the raw backend response is returned. Backend
    /// errors are returned unchanged and nothing is persisted. If either
    /// write fails, both keys are removed again before the error is returned.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        tracing::info!("Logging in as '{}'", username);
        let response = self.backend.login(username, password).await?;

        if let Err(e) = self.persist(&response.access_token, username) {
            tracing::warn!("Failed to persist session: {}", e);
            if let Err(cleanup) = self.clear_persisted() {
                tracing::warn!("Failed to roll back partial session: {}", cleanup);
            }
            return Err(e);
        }

        let mut state = self.state.write().await;
        state.session = Session::authenticated(response.access_token.clone(), username);
        Ok(response)
    }

    fn persist(&self, token: &str, username: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, username)
    }

    /// Clears the session locally. No backend call; idempotent.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.session = Session::anonymous();
        }
        self.clear_persisted()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// True iff a non-empty token is currently persisted.
    ///
    /// A storage read failure reads as not authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The persisted token, if any. An empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        match self.read_key(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read persisted token: {}", e);
                None
            }
        }
    }

    /// Credential for the next protected request, built from the persisted token.
    pub fn bearer(&self) -> BearerCredential {
        BearerCredential::from_token(self.token())
    }

    /// Snapshot of the in-memory session.
    pub async fn session(&self) -> Session {
        self.state.read().await.session.clone()
    }

    /// The logged-in username, if any.
    pub async fn username(&self) -> Option<String> {
        self.state
            .read()
            .await
            .session
            .username()
            .map(str::to_string)
    }

    pub async fn restoration(&self) -> Restoration {
        self.state.read().await.restoration
    }
}
