//! Properties for the generic data table.
//!
//! The table is presentation-only: it renders whatever rows it is given
//! and reports interactions through callbacks. In client-side mode it
//! sorts and slices the row array itself; in server-side mode it trusts
//! the caller's `current_page`/`total_count`/`sort` and only emits the
//! requested changes.

use yew::prelude::*;

use super::state::SortSpec;

/// A record the table can display: a unique row identity plus a string
/// projection per column key, used for default rendering and for
/// client-side sorting.
pub trait TableRow {
    fn row_id(&self) -> String;
    fn field(&self, key: &str) -> String;
}

/// Column descriptor. A custom `render` callback replaces the default
/// text cell; sorting still uses the string projection.
#[derive(Clone, PartialEq)]
pub struct Column<T: Clone + PartialEq> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub render: Option<Callback<T, Html>>,
}

impl<T: Clone + PartialEq> Column<T> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: Callback<T, Html>) -> Self {
        self.render = Some(render);
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: TableRow + Clone + PartialEq + 'static> {
    pub rows: Vec<T>,
    pub columns: Vec<Column<T>>,
    #[prop_or(10)]
    pub page_size: usize,
    #[prop_or_default]
    pub server_side: bool,
    /// Server-side mode only: the page the caller fetched.
    #[prop_or_default]
    pub current_page: Option<usize>,
    /// Server-side mode only: total rows across all pages.
    #[prop_or_default]
    pub total_count: Option<usize>,
    /// Server-side mode only: the sort the caller applied.
    #[prop_or_default]
    pub sort: Option<SortSpec>,
    #[prop_or_default]
    pub on_page_change: Callback<usize>,
    #[prop_or_default]
    pub on_sort_change: Callback<(String, Option<super::state::SortDirection>)>,
    #[prop_or_default]
    pub on_row_click: Option<Callback<T>>,
    /// Per-row action cell; clicks inside it never reach `on_row_click`.
    #[prop_or_default]
    pub actions: Option<Callback<T, Html>>,
    #[prop_or(AttrValue::Static("Actions"))]
    pub actions_label: AttrValue,
    #[prop_or(AttrValue::Static("No data available"))]
    pub empty_label: AttrValue,
}
