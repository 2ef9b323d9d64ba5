//! JSON file storage for the chat session.
//!
//! The file holds `{"messages": [...]}` and is rewritten in full on every
//! save, through a temporary sibling file and a rename.

use deepthink_application::{SessionStore, StoreError};
use deepthink_domain::Session;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Session store writing a single JSON file
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session =
            serde_json::from_str(&contents).map_err(|e| StoreError::Serde(e.to_string()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(session).map_err(|e| StoreError::Serde(e.to_string()))?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        debug!("Saved {} messages to {}", session.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepthink_domain::{Locale, Message, Source};

    fn sample_session() -> Session {
        let mut session = Session::new(Locale::En);
        session.push(Message::user("weather"));
        session.push(
            Message::assistant("Weather is...")
                .with_thoughts(vec!["one".to_string(), "two".to_string()])
                .with_sources(vec![Source {
                    title: "Weather".to_string(),
                    url: "https://x".to_string(),
                    snippet: "Weather is...".to_string(),
                }]),
        );
        session
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("nested").join("session.json"));
        let session = sample_session();

        store.save(&session).unwrap();
        let restored = store.load().unwrap().unwrap();

        assert_eq!(restored, session);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("session.json"));

        store.save(&sample_session()).unwrap();
        store.save(&Session::new(Locale::En)).unwrap();

        assert_eq!(store.load().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_file_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("session.json"));
        store.save(&sample_session()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2]["sources"][0]["url"], "https://x");
    }

    #[test]
    fn test_corrupt_file_is_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonSessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
    }
}
