use common::model::user::SessionUser;
use common::requests::{ChangePasswordRequest, LoginRequest, UpdateMeRequest};

use super::client::{self, ApiError, RequestOpts};

pub async fn login(username_or_email: &str, password: &str) -> Result<SessionUser, ApiError> {
    let request = LoginRequest {
        username_or_email: username_or_email.trim().to_string(),
        password: password.to_string(),
    };
    client::post_json("/auth/login", &request, RequestOpts::default()).await
}

pub async fn me() -> Result<SessionUser, ApiError> {
    client::get_json("/auth/me", RequestOpts::default()).await
}

pub async fn update_me(update: &UpdateMeRequest) -> Result<SessionUser, ApiError> {
    client::put_json("/auth/me", update, RequestOpts::default()).await
}

/// Ends the server session. A 401 means the session was already gone,
/// which is success as far as logging out is concerned.
pub async fn logout() -> Result<(), ApiError> {
    match client::post_empty("/auth/logout", RequestOpts::default()).await {
        Err(ApiError::Unauthorized { status: 401, .. }) => Ok(()),
        other => other,
    }
}

pub async fn change_password(new_password: &str) -> Result<(), ApiError> {
    let request = ChangePasswordRequest {
        new_password: new_password.to_string(),
    };
    client::post_json_unit("/auth/change-password", &request, RequestOpts::default()).await
}
