pub mod cv_use_cases;
pub mod document_viewer;
pub mod ports;
pub mod use_cases;
