use contracts::domain::courier::Courier;
use leptos::prelude::*;

use crate::shared::paging::PagedState;

#[derive(Clone, Debug, Default)]
pub struct CouriersListState {
    pub items: Vec<Courier>,
    pub paging: PagedState,
    pub error: Option<String>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<CouriersListState> {
    RwSignal::new(CouriersListState::default())
}
