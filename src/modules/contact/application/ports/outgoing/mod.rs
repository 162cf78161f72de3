pub mod contact_api;

pub use contact_api::ContactApi;
