use crate::identity::Identity;
use crate::lifecycle::Stores;
use crate::model::{Role, UserId, UserProfile};
use crate::profile::ProfileError;
use async_trait::async_trait;
use cafe_store::{Document, StoreBacked, StoreClient, StoreError};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct ProfileClient {
    profiles: StoreClient<UserProfile>,
}

#[async_trait]
impl StoreBacked<UserProfile> for ProfileClient {
    type Error = ProfileError;

    fn store(&self) -> &StoreClient<UserProfile> {
        &self.profiles
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProfileError::Storage(e)
    }
}

impl ProfileClient {
    pub fn new(stores: &Stores) -> Self {
        Self {
            profiles: stores.profiles.clone(),
        }
    }

    /// Writes the profile on sign-up. An existing profile is returned as is, so
    /// the role chosen at first registration sticks.
    #[instrument(skip(self, user), fields(uid = %user.uid))]
    pub async fn register(
        &self,
        user: &Identity,
        role: Role,
        name: &str,
    ) -> Result<UserProfile, ProfileError> {
        if let Some(existing) = self.profiles.get(user.uid.clone()).await? {
            debug!(role = %existing.role, "Profile already registered");
            return Ok(existing);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let profile = UserProfile {
            role,
            name: name.to_string(),
        };
        self.profiles.put(user.uid.clone(), profile.clone()).await?;

        info!(%role, "Profile registered");
        Ok(profile)
    }

    #[instrument(skip(self, user), fields(uid = %user.uid))]
    pub async fn update_name(
        &self,
        user: &Identity,
        name: &str,
    ) -> Result<UserProfile, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let mut profile = self
            .profiles
            .get(user.uid.clone())
            .await?
            .ok_or_else(|| ProfileError::NotFound(UserProfile::path(&user.uid)))?;
        profile.name = name.to_string();
        self.profiles.put(user.uid.clone(), profile.clone()).await?;
        Ok(profile)
    }

    pub async fn get(&self, uid: &UserId) -> Result<Option<UserProfile>, ProfileError> {
        self.fetch(uid.clone()).await
    }
}
