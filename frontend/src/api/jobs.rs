//! Opportunity endpoints, public and administrative, plus the client-side
//! validation applied to a job application before it goes on the wire.

use common::model::job::JobOpportunity;
use common::model::page::Paginated;
use common::requests::UpsertJobRequest;
use thiserror::Error;

use super::client::{self, ApiError, RequestOpts};
use super::ListQuery;

pub async fn list(query: &ListQuery) -> Result<Paginated<JobOpportunity>, ApiError> {
    let endpoint = format!("/opportunities{}", query.query_string());
    client::get_json(&endpoint, RequestOpts::public()).await
}

pub async fn get(id: i64) -> Result<JobOpportunity, ApiError> {
    client::get_json(&format!("/opportunities/{id}"), RequestOpts::public()).await
}

pub async fn create(job: &UpsertJobRequest) -> Result<JobOpportunity, ApiError> {
    client::post_json("/opportunities", job, RequestOpts::default()).await
}

pub async fn update(id: i64, job: &UpsertJobRequest) -> Result<JobOpportunity, ApiError> {
    client::put_json(&format!("/opportunities/{id}"), job, RequestOpts::default()).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    client::delete(&format!("/opportunities/{id}"), RequestOpts::default()).await
}

pub const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_CV_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// What the visitor filled in, before it becomes a multipart body. The CV
/// itself stays a browser `File`; only its name and size matter for
/// validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cv: Option<CvMeta>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CvMeta {
    pub file_name: String,
    pub size: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("phone is required")]
    MissingPhone,
    #[error("a CV file is required")]
    MissingCv,
    #[error("unsupported CV file type: {0}")]
    UnsupportedCvType(String),
    #[error("CV file size exceeds the 10MB limit")]
    CvTooLarge,
}

/// Rejects an incomplete or out-of-policy application before any network
/// call is made.
pub fn validate_application(draft: &ApplicationDraft) -> Result<(), ApplicationError> {
    if draft.name.trim().is_empty() {
        return Err(ApplicationError::MissingName);
    }
    if draft.email.trim().is_empty() {
        return Err(ApplicationError::MissingEmail);
    }
    if draft.phone.trim().is_empty() {
        return Err(ApplicationError::MissingPhone);
    }
    let Some(cv) = &draft.cv else {
        return Err(ApplicationError::MissingCv);
    };

    let extension = cv
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_CV_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ApplicationError::UnsupportedCvType(extension));
    }
    if cv.size > MAX_CV_BYTES {
        return Err(ApplicationError::CvTooLarge);
    }
    Ok(())
}

/// Validates and submits an application as multipart form data. The CV's
/// content type is left to the transport so the boundary header is set
/// correctly.
pub async fn apply(
    id: i64,
    draft: &ApplicationDraft,
    cv_file: &web_sys::File,
) -> Result<(), ApiError> {
    validate_application(draft).map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Unknown {
        status: None,
        message: "failed to build form data".to_string(),
    })?;
    let appended = form
        .append_with_str("name", draft.name.trim())
        .and_then(|_| form.append_with_str("email", draft.email.trim()))
        .and_then(|_| form.append_with_str("phone", draft.phone.trim()))
        .and_then(|_| form.append_with_blob("cv", cv_file));
    appended.map_err(|_| ApiError::Unknown {
        status: None,
        message: "failed to build form data".to_string(),
    })?;

    client::post_form(
        &format!("/opportunities/{id}/apply"),
        form,
        RequestOpts::public(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ApplicationDraft {
        ApplicationDraft {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+34 600 000 000".into(),
            cv: Some(CvMeta {
                file_name: "cv.pdf".into(),
                size: 120_000,
            }),
        }
    }

    #[test]
    fn accepts_a_complete_application() {
        assert_eq!(validate_application(&draft()), Ok(()));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut d = draft();
        d.name = "  ".into();
        assert_eq!(validate_application(&d), Err(ApplicationError::MissingName));

        let mut d = draft();
        d.email = String::new();
        assert_eq!(validate_application(&d), Err(ApplicationError::MissingEmail));

        let mut d = draft();
        d.phone = String::new();
        assert_eq!(validate_application(&d), Err(ApplicationError::MissingPhone));

        let mut d = draft();
        d.cv = None;
        assert_eq!(validate_application(&d), Err(ApplicationError::MissingCv));
    }

    #[test]
    fn rejects_unsupported_cv_extensions() {
        for name in ["cv.exe", "cv.txt", "cv", "cv.pdf.zip"] {
            let mut d = draft();
            d.cv = Some(CvMeta {
                file_name: name.into(),
                size: 1_000,
            });
            assert!(
                matches!(
                    validate_application(&d),
                    Err(ApplicationError::UnsupportedCvType(_))
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_all_allowed_extensions_case_insensitively() {
        for name in ["cv.pdf", "cv.PDF", "cv.doc", "resume.DocX"] {
            let mut d = draft();
            d.cv = Some(CvMeta {
                file_name: name.into(),
                size: 1_000,
            });
            assert_eq!(validate_application(&d), Ok(()), "{name} should pass");
        }
    }

    #[test]
    fn rejects_oversized_cv_at_the_boundary() {
        let mut d = draft();
        d.cv = Some(CvMeta {
            file_name: "cv.pdf".into(),
            size: MAX_CV_BYTES,
        });
        assert_eq!(validate_application(&d), Ok(()));

        let mut d = draft();
        d.cv = Some(CvMeta {
            file_name: "cv.pdf".into(),
            size: MAX_CV_BYTES + 1,
        });
        assert_eq!(validate_application(&d), Err(ApplicationError::CvTooLarge));
    }
}
