use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::dashboards::overview::ui::OverviewDashboard;
use crate::domain::couriers::ui::list::CouriersListPage;
use crate::domain::customers::ui::list::CustomersListPage;
use crate::domain::shop_admins::ui::list::ShopAdminsListPage;
use crate::domain::shops::ui::list::ShopsListPage;

/// Top-level sections of the dashboard. Navigation is a plain signal switch
/// rather than a URL router; the app is a single-page admin tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Overview,
    Customers,
    Couriers,
    ShopAdmins,
    Shops,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Overview,
        AdminSection::Customers,
        AdminSection::Couriers,
        AdminSection::ShopAdmins,
        AdminSection::Shops,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AdminSection::Overview => "Overview",
            AdminSection::Customers => "Customers",
            AdminSection::Couriers => "Delivery Personnel",
            AdminSection::ShopAdmins => "Shop Admins",
            AdminSection::Shops => "Shops",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AdminSection::Overview => "dashboard",
            AdminSection::Customers => "customers",
            AdminSection::Couriers => "courier",
            AdminSection::ShopAdmins => "admin",
            AdminSection::Shops => "shop",
        }
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let current = RwSignal::new(AdminSection::Overview);

    view! {
        <div class="shell">
            <Sidebar current=current />
            <main class="shell__content">
                {move || match current.get() {
                    AdminSection::Overview => view! { <OverviewDashboard /> }.into_any(),
                    AdminSection::Customers => view! { <CustomersListPage /> }.into_any(),
                    AdminSection::Couriers => view! { <CouriersListPage /> }.into_any(),
                    AdminSection::ShopAdmins => view! { <ShopAdminsListPage /> }.into_any(),
                    AdminSection::Shops => view! { <ShopsListPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
