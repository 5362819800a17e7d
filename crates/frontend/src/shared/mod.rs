pub mod config;
pub mod page_frame;
