//! REST client: one module per backend resource plus the shared request
//! plumbing in [`client`].

pub mod auth;
pub mod client;
pub mod configuration;
pub mod jobs;
pub mod legal;
pub mod mail;
pub mod users;

use crate::components::data_table::SortDirection;

/// Common query parameters for the paginated list endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortDirection>,
}

impl ListQuery {
    /// Renders `?page=..&limit=..` with URI-escaped values; empty when no
    /// parameter is set.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", escape(search.trim())));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", escape(sort_by)));
            let order = match self.sort_order {
                Some(SortDirection::Descending) => "desc",
                _ => "asc",
            };
            pairs.push(("sort_order", order.to_string()));
        }

        if pairs.is_empty() {
            return String::new();
        }
        let joined: Vec<String> = pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("?{}", joined.join("&"))
    }
}

fn escape(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
