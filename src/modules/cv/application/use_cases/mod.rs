pub mod delete_cv;
pub mod download_cv;
pub mod fetch_cvs;
pub mod get_current_cv;
pub mod upload_cv;
