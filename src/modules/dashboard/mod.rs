pub mod dashboard_service;
pub mod dashboard_snapshot;

pub use dashboard_service::DashboardService;
pub use dashboard_snapshot::{DashboardSection, DashboardSnapshot, DashboardStats};
