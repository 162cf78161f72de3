// src/cli/app_context.rs
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::AuthApiHttp;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::session::SessionStore;
use crate::modules::auth::application::use_cases::{
    fetch_current_user::FetchCurrentUserUseCase, login_user::LoginUserUseCase,
    logout_user::LogoutUseCase, refresh_token::RefreshTokenUseCase,
};
use crate::modules::contact::adapter::outgoing::ContactApiHttp;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::{
    DeleteContactMessageService, GetContactMessageService, GetContactMessagesService,
    SendContactMessageService,
};
use crate::modules::cv::adapter::outgoing::CvFileApiHttp;
use crate::modules::cv::application::cv_use_cases::CvUseCases;
use crate::modules::cv::application::use_cases::{
    delete_cv::DeleteCvUseCase,
    download_cv::DownloadCvUseCase,
    fetch_cvs::{FetchCvByIdUseCase, FetchCvsUseCase},
    get_current_cv::{CvExistsUseCase, GetCurrentCvUseCase},
    upload_cv::UploadCvUseCase,
};
use crate::modules::dashboard::DashboardService;
use crate::modules::profile::adapter::outgoing::ProfileApiHttp;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{
    CreateProfileService, DeleteProfileService, GetProfilesService, GetSingleProfileService,
    LoadCurrentProfileService, UpdateProfileService,
};
use crate::modules::project::adapter::outgoing::ProjectApiHttp;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::shared::config::ApiConfig;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::media::MediaUrls;

/// Every use case the CLI can reach, wired to the HTTP adapters.
///
/// One `ApiClient` is shared by all adapters, so a login performed through
/// `auth` is seen by every later call.
#[derive(Clone)]
pub struct AppContext {
    pub media: MediaUrls,
    pub projects: ProjectUseCases,
    pub profile: ProfileUseCases,
    pub cv: CvUseCases,
    pub contact: ContactUseCases,
    pub auth: AuthUseCases,
    pub dashboard: DashboardService,
}

impl AppContext {
    pub fn build(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = ApiClient::new(config)?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: ApiClient) -> Self {
        let media = MediaUrls::new(client.root_url());

        let project_api = ProjectApiHttp::new(client.clone());
        let projects = ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_api.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_api.clone())),
            create: Arc::new(CreateProjectService::new(project_api.clone())),
            update: Arc::new(UpdateProjectService::new(project_api.clone())),
            delete: Arc::new(DeleteProjectService::new(project_api)),
        };

        let profile_api = ProfileApiHttp::new(client.clone());
        let profile = ProfileUseCases {
            get_list: Arc::new(GetProfilesService::new(profile_api.clone())),
            get_single: Arc::new(GetSingleProfileService::new(profile_api.clone())),
            load_current: Arc::new(LoadCurrentProfileService::new(profile_api.clone())),
            create: Arc::new(CreateProfileService::new(profile_api.clone())),
            update: Arc::new(UpdateProfileService::new(profile_api.clone())),
            delete: Arc::new(DeleteProfileService::new(profile_api)),
        };

        let cv_api = CvFileApiHttp::new(client.clone());
        let cv = CvUseCases {
            get_current: Arc::new(GetCurrentCvUseCase::new(cv_api.clone())),
            exists: Arc::new(CvExistsUseCase::new(cv_api.clone())),
            fetch_all: Arc::new(FetchCvsUseCase::new(cv_api.clone())),
            fetch_by_id: Arc::new(FetchCvByIdUseCase::new(cv_api.clone())),
            upload: Arc::new(UploadCvUseCase::new(cv_api.clone())),
            download: Arc::new(DownloadCvUseCase::new(cv_api.clone())),
            delete: Arc::new(DeleteCvUseCase::new(cv_api)),
        };

        let contact_api = ContactApiHttp::new(client.clone());
        let contact = ContactUseCases {
            send: Arc::new(SendContactMessageService::new(contact_api.clone())),
            get_list: Arc::new(GetContactMessagesService::new(contact_api.clone())),
            get_single: Arc::new(GetContactMessageService::new(contact_api.clone())),
            delete: Arc::new(DeleteContactMessageService::new(contact_api)),
        };

        let session = SessionStore::new(client.tokens().clone());
        let auth_api = AuthApiHttp::new(client);
        let auth = AuthUseCases {
            login: Arc::new(LoginUserUseCase::new(auth_api.clone(), session.clone())),
            refresh: Arc::new(RefreshTokenUseCase::new(auth_api.clone(), session.clone())),
            me: Arc::new(FetchCurrentUserUseCase::new(auth_api, session.clone())),
            logout: Arc::new(LogoutUseCase::new(session.clone())),
            session,
        };

        let dashboard = DashboardService::new(
            projects.get_list.clone(),
            contact.get_list.clone(),
            profile.load_current.clone(),
            cv.get_current.clone(),
        );

        Self {
            media,
            projects,
            profile,
            cv,
            contact,
            auth,
            dashboard,
        }
    }
}
