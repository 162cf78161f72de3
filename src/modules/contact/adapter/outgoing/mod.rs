mod contact_api_http;

pub use contact_api_http::ContactApiHttp;
