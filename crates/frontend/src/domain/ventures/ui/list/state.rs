use contracts::domain::ventures::JointVenture;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct VentureListState {
    pub items: Vec<JointVenture>,
    pub search_query: String,
    pub status_filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for VentureListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state() -> RwSignal<VentureListState> {
    RwSignal::new(VentureListState::default())
}
