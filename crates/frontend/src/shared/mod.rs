pub mod api_utils;
pub mod browser;
pub mod config;
pub mod modal_frame;
pub mod notifications;
