pub mod auth_use_cases;
pub mod domain;
pub mod ports;
pub mod session;
pub mod use_cases;
