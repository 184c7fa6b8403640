//! [`TableRow`] projections for the domain records shown in data tables.

use common::model::job::JobOpportunity;
use common::model::user::{SessionUser, UserRole};

use crate::components::data_table::TableRow;

impl TableRow for JobOpportunity {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "reference" => self.reference().to_string(),
            "job_type" => self.job_type().to_string(),
            "experience" => self.experience().to_string(),
            "location" => self.location().to_string(),
            "industry" => self.industry().to_string(),
            "company_name" => self.company_name().to_string(),
            "salary_range" => self.salary_range().to_string(),
            "post_date" => self.post_date().to_string(),
            "created_at" => self.created_at.clone(),
            "updated_at" => self.updated_at.clone(),
            _ => String::new(),
        }
    }
}

impl TableRow for SessionUser {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> String {
        match key {
            "username" => self.username.clone(),
            "full_name" => self.full_name.clone(),
            "email" => self.email.clone(),
            "role" => match self.role {
                UserRole::Owner => "owner".to_string(),
                UserRole::Admin => "admin".to_string(),
                UserRole::Guest => "guest".to_string(),
            },
            "active" => if self.active { "Active" } else { "Inactive" }.to_string(),
            "created_at" => self.created_at.clone(),
            "updated_at" => self.updated_at.clone(),
            _ => String::new(),
        }
    }
}
