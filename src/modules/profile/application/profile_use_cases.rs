use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteProfileUseCase, GetProfileUseCase, GetProfilesUseCase,
    LoadCurrentProfileUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_list: Arc<dyn GetProfilesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub load_current: Arc<dyn LoadCurrentProfileUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProfileUseCase + Send + Sync>,
}
