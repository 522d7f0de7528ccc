pub mod storefront;
pub mod ui;
