pub mod delete_profile_service;
pub mod get_profiles_service;
pub mod get_single_profile_service;
pub mod save_profile_service;

pub use delete_profile_service::DeleteProfileService;
pub use get_profiles_service::{GetProfilesService, LoadCurrentProfileService};
pub use get_single_profile_service::GetSingleProfileService;
pub use save_profile_service::{CreateProfileService, UpdateProfileService};
