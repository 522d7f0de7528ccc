pub mod confirm_dialog;
pub mod filter_bar;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
