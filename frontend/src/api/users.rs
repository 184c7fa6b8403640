use common::model::page::Paginated;
use common::model::user::SessionUser;
use common::requests::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest};

use super::client::{self, ApiError, RequestOpts};
use super::ListQuery;

pub async fn list(query: &ListQuery) -> Result<Paginated<SessionUser>, ApiError> {
    let endpoint = format!("/users{}", query.query_string());
    client::get_json(&endpoint, RequestOpts::default()).await
}

pub async fn create(user: &CreateUserRequest) -> Result<SessionUser, ApiError> {
    client::post_json("/users", user, RequestOpts::default()).await
}

pub async fn update(id: i64, update: &UpdateUserRequest) -> Result<SessionUser, ApiError> {
    client::put_json(&format!("/users/{id}"), update, RequestOpts::default()).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    client::delete(&format!("/users/{id}"), RequestOpts::default()).await
}

pub async fn reset_password(id: i64, new_password: &str) -> Result<(), ApiError> {
    let request = ChangePasswordRequest {
        new_password: new_password.to_string(),
    };
    client::post_json_unit(
        &format!("/users/{id}/reset-password"),
        &request,
        RequestOpts::default(),
    )
    .await
}

pub async fn deactivate(id: i64) -> Result<(), ApiError> {
    client::post_empty(&format!("/users/{id}/deactivate"), RequestOpts::default()).await
}

pub async fn activate(id: i64) -> Result<(), ApiError> {
    client::post_empty(&format!("/users/{id}/activate"), RequestOpts::default()).await
}
