use common::requests::SmtpTestResponse;

use super::client::{self, ApiError, RequestOpts};

/// Probes the configured SMTP server without sending a message.
pub async fn test_smtp() -> Result<SmtpTestResponse, ApiError> {
    client::post_empty_json("/mail/test-smtp", RequestOpts::default()).await
}
