pub mod couriers;
pub mod customers;
pub mod shop_admins;
pub mod shops;
