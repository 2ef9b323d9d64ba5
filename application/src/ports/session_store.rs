//! Session persistence port

use deepthink_domain::Session;
use thiserror::Error;

/// Errors that can occur while loading or saving a session
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage format error: {0}")]
    Serde(String),
}

/// Storage for the single persisted chat session
///
/// The whole session is written on every save; there is no versioning or
/// expiry.
pub trait SessionStore: Send + Sync {
    /// Load the stored session, or `None` if nothing was stored yet
    fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Overwrite the stored session
    fn save(&self, session: &Session) -> Result<(), StoreError>;
}

/// Store that keeps nothing, for ephemeral chats
pub struct NoSessionStore;

impl SessionStore for NoSessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(None)
    }

    fn save(&self, _session: &Session) -> Result<(), StoreError> {
        Ok(())
    }
}
