use contracts::domain::reports::RegulatoryReport;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ReportListState {
    pub items: Vec<RegulatoryReport>,
    pub search_query: String,
    pub status_filter: String,
    pub type_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ReportListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: String::new(),
            type_filter: String::new(),
            sort_field: "period".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state() -> RwSignal<ReportListState> {
    RwSignal::new(ReportListState::default())
}
