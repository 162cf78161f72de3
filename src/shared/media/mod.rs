pub mod file_upload;
pub mod media_urls;
pub mod upload_policy;

pub use file_upload::FileUpload;
pub use media_urls::MediaUrls;
pub use upload_policy::{UploadPolicy, UploadRejection};
