use serde::{Deserialize, Serialize};

/// Tenant configuration: branding plus the notification email routing used
/// by the backend when an application arrives. Email fields hold
/// comma-separated address lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: i64,
    #[serde(default)]
    pub recipient_emails: Option<String>,
    #[serde(default)]
    pub copy_emails: Option<String>,
    #[serde(default)]
    pub blind_copy_emails: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Data URI or URL of the tenant logo.
    #[serde(default)]
    pub company_logo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Public subset of the configuration served to anonymous visitors so the
/// header and footer can render branding without authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
}
