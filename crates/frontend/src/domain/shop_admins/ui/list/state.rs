use contracts::domain::shop::Shop;
use leptos::prelude::*;

use crate::shared::paging::PagedState;

#[derive(Clone, Debug, Default)]
pub struct ShopAdminsListState {
    pub items: Vec<Shop>,
    pub paging: PagedState,
    pub error: Option<String>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<ShopAdminsListState> {
    RwSignal::new(ShopAdminsListState::default())
}
