pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod error;
pub mod http;
pub mod icons;
pub mod modal;
pub mod print;
