mod delete_profile;
mod get_profiles;
mod save_profile;

pub use delete_profile::{DeleteProfileError, DeleteProfileUseCase};
pub use get_profiles::{
    GetProfileError, GetProfileUseCase, GetProfilesUseCase, LoadCurrentProfileUseCase,
};
pub use save_profile::{CreateProfileUseCase, SaveProfileError, UpdateProfileUseCase};
