use serde::{Deserialize, Serialize};

/// A published job opening.
///
/// Every descriptive field other than `title` is optional on the wire; the
/// client normalizes missing values to empty strings when it maps responses,
/// so view code never deals with `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOpportunity {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub information: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_info: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub post_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl JobOpportunity {
    pub fn reference(&self) -> &str {
        self.reference.as_deref().unwrap_or("")
    }

    pub fn job_type(&self) -> &str {
        self.job_type.as_deref().unwrap_or("")
    }

    pub fn experience(&self) -> &str {
        self.experience.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn industry(&self) -> &str {
        self.industry.as_deref().unwrap_or("")
    }

    pub fn information(&self) -> &str {
        self.information.as_deref().unwrap_or("")
    }

    pub fn company_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or("")
    }

    pub fn company_info(&self) -> &str {
        self.company_info.as_deref().unwrap_or("")
    }

    pub fn salary_range(&self) -> &str {
        self.salary_range.as_deref().unwrap_or("")
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or("")
    }

    pub fn post_date(&self) -> &str {
        self.post_date.as_deref().unwrap_or("")
    }
}
