pub mod config;
pub mod http;
pub mod media;
pub mod timestamp;
pub mod ui;
pub mod validation;
