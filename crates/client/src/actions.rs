//! Remote actions: API calls whose results land in the auth store.

use async_trait::async_trait;
use ulms_shared::profile::{settle_update_result, ProfileActions, ProfileUpdate};
use ulms_shared::{ActionResponse, ApiError, User, UserResponse};

use crate::api_client::{profile_form, ApiClient};
use crate::stores;

const UPDATE_PROFILE_PATH: &str = "user/update";
const CURRENT_USER_PATH: &str = "user/me";

#[derive(Debug, Clone)]
pub struct HttpProfileActions {
    client: ApiClient,
}

impl HttpProfileActions {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Default for HttpProfileActions {
    fn default() -> Self {
        Self::new(ApiClient::shared())
    }
}

#[async_trait(?Send)]
impl ProfileActions for HttpProfileActions {
    fn current_user(&self) -> Option<User> {
        stores::current_user()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<ActionResponse, ApiError> {
        crate::log_debug!(
            "updating profile (new avatar: {})",
            update.avatar.is_some()
        );
        let result = self
            .client
            .put_multipart::<ActionResponse>(UPDATE_PROFILE_PATH, profile_form(&update))
            .await;

        let settled = settle_update_result(result);
        if let Ok(resp) = &settled {
            if !resp.success {
                crate::log_warn!(
                    "profile update refused: {}",
                    resp.message.as_deref().unwrap_or("no message")
                );
            }
        }
        settled
    }

    async fn refresh_user(&self) -> Result<(), ApiError> {
        match self.client.get_json::<UserResponse>(CURRENT_USER_PATH).await {
            Ok(resp) => {
                stores::set_user(resp.user);
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                crate::log_warn!("session expired, signing out");
                stores::clear();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
