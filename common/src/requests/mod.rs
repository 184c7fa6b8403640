//! Request and response payloads exchanged with the REST backend.
//!
//! These mirror the backend contract exactly; optional fields are omitted
//! from the serialized body rather than sent as `null` where the backend
//! treats the two differently (partial updates).

use serde::{Deserialize, Serialize};

use crate::model::user::UserRole;

/// Login accepts either the username or the email address in a single
/// identifier field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Profile update for the authenticated account. All fields optional;
/// absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub new_password: String,
}

/// Account creation. The password travels only in this direction and is
/// never echoed back by any endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertJobRequest {
    pub title: String,
    pub reference: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub information: Option<String>,
    pub company_name: Option<String>,
    pub company_info: Option<String>,
    pub salary_range: Option<String>,
    pub currency: Option<String>,
    pub post_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompanyRequest {
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmailRequest {
    pub recipient_emails: Option<String>,
    pub copy_emails: Option<String>,
    pub blind_copy_emails: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SmtpConnectionStatus {
    Ok,
    Failed,
}

/// Outcome of the SMTP connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpTestResponse {
    pub connection_status: SmtpConnectionStatus,
    #[serde(default)]
    pub message: Option<String>,
}
