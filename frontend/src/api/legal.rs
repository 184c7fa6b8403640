use common::model::legal::LegalDocument;

use super::client::{self, ApiError, RequestOpts};
use crate::locale::Locale;

pub async fn terms_and_conditions(locale: Locale) -> Result<LegalDocument, ApiError> {
    client::get_json(
        &format!("/legal/terms-and-conditions?language={locale}"),
        RequestOpts::public(),
    )
    .await
}

pub async fn privacy_policy(locale: Locale) -> Result<LegalDocument, ApiError> {
    client::get_json(
        &format!("/legal/privacy-policy?language={locale}"),
        RequestOpts::public(),
    )
    .await
}
