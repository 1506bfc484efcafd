use log::debug;
use std::sync::Arc;

use super::session_model::UserProfile;
use super::session_traits::{SessionServiceTrait, SessionStoreTrait};
use crate::errors::Result;

/// Service managing the signed-in user's identity record.
pub struct SessionService {
    store: Arc<dyn SessionStoreTrait>,
}

impl SessionService {
    /// Creates a new SessionService instance
    pub fn new(store: Arc<dyn SessionStoreTrait>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl SessionServiceTrait for SessionService {
    async fn login(&self, profile: UserProfile) -> Result<()> {
        debug!("Persisting session for user {}", profile.username);
        self.store.save(&profile).await
    }

    async fn logout(&self) -> Result<()> {
        self.store.clear().await
    }

    fn current_user(&self) -> Result<Option<UserProfile>> {
        self.store.load()
    }
}
