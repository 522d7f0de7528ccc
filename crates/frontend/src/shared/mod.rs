pub mod bulk;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod paging;
pub mod selection;
