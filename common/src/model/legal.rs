use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalSection {
    pub title: String,
    pub content: String,
}

/// A locale-specific legal document (terms and conditions or privacy
/// policy) as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub title: String,
    #[serde(default)]
    pub introduction: Option<String>,
    pub sections: Vec<LegalSection>,
    #[serde(default)]
    pub last_updated: Option<String>,
}
