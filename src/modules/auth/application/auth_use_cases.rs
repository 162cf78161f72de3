use std::sync::Arc;

use crate::modules::auth::application::session::SessionStore;
use crate::modules::auth::application::use_cases::fetch_current_user::IFetchCurrentUserUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::logout_user::ILogoutUseCase;
use crate::modules::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub me: Arc<dyn IFetchCurrentUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub session: SessionStore,
}
