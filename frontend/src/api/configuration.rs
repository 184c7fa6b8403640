use common::model::configuration::{AppInfo, Configuration};
use common::requests::{UpdateCompanyRequest, UpdateEmailRequest};

use super::client::{self, ApiError, RequestOpts};

pub async fn get() -> Result<Configuration, ApiError> {
    client::get_json("/configuration", RequestOpts::default()).await
}

/// Branding subset readable without authentication, so the public header
/// and footer render before (or without) login.
pub async fn app_info() -> Result<AppInfo, ApiError> {
    client::get_json("/configuration/app-info", RequestOpts::public()).await
}

pub async fn update_company(update: &UpdateCompanyRequest) -> Result<Configuration, ApiError> {
    client::put_json("/configuration/company", update, RequestOpts::default()).await
}

pub async fn update_email(update: &UpdateEmailRequest) -> Result<Configuration, ApiError> {
    client::put_json("/configuration/email", update, RequestOpts::default()).await
}
