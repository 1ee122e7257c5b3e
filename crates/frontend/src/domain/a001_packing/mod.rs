pub mod api;
pub mod batch;
pub mod selection;
pub mod ui;
