use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactMessageUseCase, GetContactMessageUseCase, GetContactMessagesUseCase,
    SendContactMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub send: Arc<dyn SendContactMessageUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetContactMessagesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetContactMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactMessageUseCase + Send + Sync>,
}
