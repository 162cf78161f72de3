pub mod cv_file_api;

pub use cv_file_api::CvFileApi;
