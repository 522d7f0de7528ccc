pub mod notify;
pub mod shell;
pub mod sidebar;
