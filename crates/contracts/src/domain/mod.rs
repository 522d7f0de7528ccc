pub mod courier;
pub mod customer;
pub mod shop;
