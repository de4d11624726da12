use contracts::domain::permits::PermitApplication;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PermitListState {
    pub items: Vec<PermitApplication>,
    pub search_query: String,
    /// Status `as_str` value; empty string means "all".
    pub status_filter: String,
    /// Permit type `as_str` value; empty string means "all".
    pub type_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for PermitListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: String::new(),
            type_filter: String::new(),
            sort_field: "submitted_at".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state() -> RwSignal<PermitListState> {
    RwSignal::new(PermitListState::default())
}
