use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::debug;

use advisor_core::constants::SESSION_STORAGE_KEY;
use advisor_core::errors::{Error, Result, StorageError};
use advisor_core::session::{SessionStoreTrait, UserProfile};

/// In-memory key-value store for the user identity record.
///
/// Values are serialized JSON strings kept under a fixed key. Writes
/// replace the full record; there is no partial merge.
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: PoisonError<T>) -> Error {
        Error::Storage(StorageError::LockPoisoned("session".to_string()))
    }
}

#[async_trait]
impl SessionStoreTrait for InMemorySessionStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        let entries = self.entries.read().map_err(Self::poisoned)?;
        match entries.get(SESSION_STORAGE_KEY) {
            Some(raw) => {
                let profile = serde_json::from_str(raw)
                    .map_err(|e| Error::Storage(StorageError::Serialization(e.to_string())))?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)
            .map_err(|e| Error::Storage(StorageError::Serialization(e.to_string())))?;
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        debug!("Persisting profile for user {}", profile.username);
        entries.insert(SESSION_STORAGE_KEY.to_string(), raw);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        debug!("Clearing stored user profile");
        entries.remove(SESSION_STORAGE_KEY);
        Ok(())
    }
}
