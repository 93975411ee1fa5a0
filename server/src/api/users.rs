//! User profile operations.

use crate::types::{ApiResponse, User, UserId, UserPatch};

use super::{ERR_INTERNAL, MockApi};

impl MockApi {
    /// Fetch a user by ID.
    pub async fn get_user(&self, user_id: &UserId) -> ApiResponse<User> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        match store.user(user_id) {
            Some(user) => ApiResponse::ok(user),
            None => ApiResponse::error("User not found"),
        }
    }

    /// Apply a profile patch to a user.
    pub async fn update_profile(&self, user_id: &UserId, patch: UserPatch) -> ApiResponse<User> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        match store.update_user(user_id, patch) {
            Some(user) => ApiResponse::ok_with_message(user, "Profile updated successfully"),
            None => ApiResponse::error("User not found"),
        }
    }

    /// List every creator account.
    pub async fn get_creators(&self) -> ApiResponse<Vec<User>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        ApiResponse::ok(store.creators())
    }
}
