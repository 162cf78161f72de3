pub mod api_client;
pub mod error;
pub mod multipart;
pub mod token_store;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use multipart::MultipartPayload;
pub use token_store::{TokenStore, Tokens};
