mod cv_file_api_http;

pub use cv_file_api_http::CvFileApiHttp;
