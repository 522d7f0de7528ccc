use contracts::domain::customer::Customer;
use leptos::prelude::*;

use crate::shared::paging::PagedState;

#[derive(Clone, Debug, Default)]
pub struct CustomersListState {
    pub items: Vec<Customer>,
    pub paging: PagedState,
    pub error: Option<String>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<CustomersListState> {
    RwSignal::new(CustomersListState::default())
}
