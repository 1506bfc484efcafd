//! Session store and service traits.

use async_trait::async_trait;

use super::session_model::UserProfile;
use crate::errors::Result;

/// Key-value store holding the persisted user identity record.
///
/// Implementations persist the profile as a full-record overwrite under
/// [`crate::constants::SESSION_STORAGE_KEY`]; there is no partial merge.
#[async_trait]
pub trait SessionStoreTrait: Send + Sync {
    /// Loads the stored profile, if any.
    fn load(&self) -> Result<Option<UserProfile>>;

    /// Stores the profile, replacing whatever was there.
    async fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Removes the stored profile.
    async fn clear(&self) -> Result<()>;
}

/// Trait defining the contract for session operations.
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    /// Persists the identity record of the user who just signed in.
    async fn login(&self, profile: UserProfile) -> Result<()>;

    /// Clears the persisted identity record.
    async fn logout(&self) -> Result<()>;

    /// Returns the signed-in user, if any. Read once at startup.
    fn current_user(&self) -> Result<Option<UserProfile>>;
}
