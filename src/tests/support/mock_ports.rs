//! In-memory outgoing ports. Each mock is `Clone` and shares its state, so a
//! test keeps one handle for assertions and gives another to the service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AuthSession, LoginRequest, UserAccount};
use crate::modules::auth::application::ports::outgoing::AuthApi;
use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::outgoing::ContactApi;
use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::cv::domain::entities::CvFile;
use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::outgoing::{ProfileApi, ProfileFields};
use crate::modules::project::application::domain::{Project, ProjectImage};
use crate::modules::project::application::ports::outgoing::{ProjectApi, ProjectPayload};
use crate::shared::http::ApiError;
use crate::shared::media::FileUpload;

fn next_id(ids: impl Iterator<Item = Option<i64>>) -> i64 {
    ids.flatten().max().unwrap_or(0) + 1
}

fn not_found(path: String) -> ApiError {
    ApiError::NotFound(path)
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Default)]
struct ProjectState {
    projects: Vec<Project>,
    failure: Option<ApiError>,
    calls: usize,
    create_calls: Vec<(ProjectPayload, Vec<FileUpload>)>,
    update_calls: Vec<(i64, ProjectPayload, Vec<FileUpload>)>,
}

#[derive(Clone, Default)]
pub struct MockProjectApi {
    state: Arc<Mutex<ProjectState>>,
}

impl MockProjectApi {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProjectState {
                projects,
                ..ProjectState::default()
            })),
        }
    }

    /// Every call fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProjectState {
                failure: Some(error),
                ..ProjectState::default()
            })),
        }
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub fn create_calls(&self) -> Vec<(ProjectPayload, Vec<FileUpload>)> {
        self.state.lock().unwrap().create_calls.clone()
    }

    pub fn update_calls(&self) -> Vec<(i64, ProjectPayload, Vec<FileUpload>)> {
        self.state.lock().unwrap().update_calls.clone()
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, ProjectState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(state),
        }
    }
}

fn uploaded_images(files: &[FileUpload]) -> impl Iterator<Item = ProjectImage> + '_ {
    files
        .iter()
        .map(|file| ProjectImage::new(None, file.file_name.clone()))
}

#[async_trait]
impl ProjectApi for MockProjectApi {
    async fn list(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.begin()?.projects.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, ApiError> {
        self.begin()?
            .projects
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(format!("/projects/{id}")))
    }

    async fn create(
        &self,
        data: ProjectPayload,
        images: Vec<FileUpload>,
    ) -> Result<Project, ApiError> {
        let mut state = self.begin()?;
        state.create_calls.push((data.clone(), images.clone()));

        let project = Project {
            id: Some(next_id(state.projects.iter().map(|p| p.id))),
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            images: uploaded_images(&images).collect(),
        };
        state.projects.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: i64,
        data: ProjectPayload,
        new_images: Vec<FileUpload>,
    ) -> Result<Project, ApiError> {
        let mut state = self.begin()?;
        state
            .update_calls
            .push((id, data.clone(), new_images.clone()));

        let stored = state
            .projects
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| not_found(format!("/projects/{id}")))?;

        stored.title = data.title;
        stored.description = data.description;
        stored.technologies = data.technologies;
        stored.images = data.existing_images;
        stored.images.extend(uploaded_images(&new_images));
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.begin()?;
        let before = state.projects.len();
        state.projects.retain(|p| p.id != Some(id));
        if state.projects.len() == before {
            return Err(not_found(format!("/projects/{id}")));
        }
        Ok(())
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// A write that reached the profile port. Photo uploads are recorded by
/// file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCall {
    Create(ProfileFields, String),
    UpdateWithPhoto(i64, ProfileFields, String),
    Update(i64, Profile),
    Delete(i64),
}

#[derive(Default)]
struct ProfileState {
    profiles: Vec<Profile>,
    failure: Option<ApiError>,
    calls: Vec<ProfileCall>,
}

#[derive(Clone, Default)]
pub struct MockProfileApi {
    state: Arc<Mutex<ProfileState>>,
}

impl MockProfileApi {
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProfileState {
                profiles,
                ..ProfileState::default()
            })),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProfileState {
                failure: Some(error),
                ..ProfileState::default()
            })),
        }
    }

    pub fn calls(&self) -> Vec<ProfileCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.state.lock().unwrap().profiles.clone()
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, ProfileState>, ApiError> {
        let state = self.state.lock().unwrap();
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl ProfileApi for MockProfileApi {
    async fn list(&self) -> Result<Vec<Profile>, ApiError> {
        Ok(self.begin()?.profiles.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Profile, ApiError> {
        self.begin()?
            .profiles
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(format!("/profiles/{id}")))
    }

    async fn create(&self, fields: ProfileFields, photo: FileUpload) -> Result<Profile, ApiError> {
        let mut state = self.begin()?;
        state
            .calls
            .push(ProfileCall::Create(fields.clone(), photo.file_name.clone()));

        let profile = Profile {
            id: Some(next_id(state.profiles.iter().map(|p| p.id))),
            full_name: fields.full_name,
            title: fields.title,
            bio: fields.bio,
            photo_url: Some(photo.file_name),
        };
        state.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update_with_photo(
        &self,
        id: i64,
        fields: ProfileFields,
        photo: FileUpload,
    ) -> Result<Profile, ApiError> {
        let mut state = self.begin()?;
        state.calls.push(ProfileCall::UpdateWithPhoto(
            id,
            fields.clone(),
            photo.file_name.clone(),
        ));

        let stored = state
            .profiles
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| not_found(format!("/profiles/{id}")))?;
        stored.full_name = fields.full_name;
        stored.title = fields.title;
        stored.bio = fields.bio;
        stored.photo_url = Some(photo.file_name);
        Ok(stored.clone())
    }

    async fn update(&self, id: i64, profile: Profile) -> Result<Profile, ApiError> {
        let mut state = self.begin()?;
        state.calls.push(ProfileCall::Update(id, profile.clone()));

        let stored = state
            .profiles
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| not_found(format!("/profiles/{id}")))?;
        *stored = Profile {
            id: Some(id),
            ..profile
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.begin()?;
        state.calls.push(ProfileCall::Delete(id));

        let before = state.profiles.len();
        state.profiles.retain(|p| p.id != Some(id));
        if state.profiles.len() == before {
            return Err(not_found(format!("/profiles/{id}")));
        }
        Ok(())
    }
}

// ============================================================================
// CV files
// ============================================================================

#[derive(Default)]
struct CvState {
    files: Vec<CvFile>,
    failure: Option<ApiError>,
    uploads: usize,
}

/// The last stored file is the current CV. Downloaded content is the
/// filename's bytes.
#[derive(Clone, Default)]
pub struct MockCvFileApi {
    state: Arc<Mutex<CvState>>,
}

impl MockCvFileApi {
    pub fn with_files(files: Vec<CvFile>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CvState {
                files,
                ..CvState::default()
            })),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            state: Arc::new(Mutex::new(CvState {
                failure: Some(error),
                ..CvState::default()
            })),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.state.lock().unwrap().uploads
    }

    pub fn stored_ids(&self) -> Vec<i64> {
        self.state
            .lock()
            .unwrap()
            .files
            .iter()
            .filter_map(|f| f.id)
            .collect()
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, CvState>, ApiError> {
        let state = self.state.lock().unwrap();
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl CvFileApi for MockCvFileApi {
    async fn current(&self) -> Result<CvFile, ApiError> {
        self.begin()?
            .files
            .last()
            .cloned()
            .ok_or_else(|| not_found("/cvfiles/current".to_string()))
    }

    async fn list(&self) -> Result<Vec<CvFile>, ApiError> {
        Ok(self.begin()?.files.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<CvFile, ApiError> {
        self.begin()?
            .files
            .iter()
            .find(|f| f.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(format!("/cvfiles/{id}")))
    }

    async fn upload(&self, file: FileUpload) -> Result<CvFile, ApiError> {
        let mut state = self.begin()?;
        state.uploads += 1;

        let cv = CvFile {
            id: Some(next_id(state.files.iter().map(|f| f.id))),
            filename: file.file_name.clone(),
            content_type: Some(file.content_type.clone()),
            size: Some(file.size()),
            upload_date: None,
        };
        state.files.push(cv.clone());
        Ok(cv)
    }

    async fn download_current(&self) -> Result<Vec<u8>, ApiError> {
        self.begin()?
            .files
            .last()
            .map(|f| f.filename.as_bytes().to_vec())
            .ok_or_else(|| not_found("/cvfiles/download".to_string()))
    }

    async fn download_by_filename(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        self.begin()?
            .files
            .iter()
            .find(|f| f.filename == filename)
            .map(|f| f.filename.as_bytes().to_vec())
            .ok_or_else(|| not_found(format!("/cvfiles/download/{filename}")))
    }

    async fn delete_current(&self) -> Result<(), ApiError> {
        self.begin()?
            .files
            .pop()
            .map(|_| ())
            .ok_or_else(|| not_found("/cvfiles".to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        let mut state = self.begin()?;
        let before = state.files.len();
        state.files.retain(|f| f.id != Some(id));
        if state.files.len() == before {
            return Err(not_found(format!("/cvfiles/{id}")));
        }
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ApiError> {
        Ok(!self.begin()?.files.is_empty())
    }
}

// ============================================================================
// Contact messages
// ============================================================================

#[derive(Clone, Default)]
pub struct MockContactApi {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl MockContactApi {
    pub fn with_messages(messages: Vec<ContactMessage>) -> Self {
        Self {
            messages: Arc::new(Mutex::new(messages)),
        }
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactApi for MockContactApi {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, ApiError> {
        let mut messages = self.messages.lock().unwrap();
        let stored = ContactMessage {
            id: Some(next_id(messages.iter().map(|m| m.id))),
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: None,
        };
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ApiError> {
        Ok(self.messages())
    }

    async fn get_by_id(&self, id: i64) -> Result<ContactMessage, ApiError> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(format!("/contact/{id}")))
    }

    async fn delete(&self, id: i64) -> Result<String, ApiError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != Some(id));
        if messages.len() == before {
            return Err(not_found(format!("/contact/{id}")));
        }
        Ok(format!("Message {id} deleted"))
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Accepts one password. Logging in issues `access-1`/`refresh-1`;
/// refreshing with `refresh-1` issues `access-2`/`refresh-2`.
#[derive(Clone)]
pub struct MockAuthApi {
    password: String,
}

impl MockAuthApi {
    pub fn accepting(password: &str) -> Self {
        Self {
            password: password.to_string(),
        }
    }

    pub fn admin() -> UserAccount {
        UserAccount {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            role: "ADMIN".to_string(),
        }
    }

    fn session(access: &str, refresh: &str) -> AuthSession {
        AuthSession {
            access_token: access.to_string(),
            refresh_token: Some(refresh.to_string()),
            token_type: "Bearer".to_string(),
            expires_in: Some(3600),
            user: Some(Self::admin()),
        }
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        if request.password() != self.password {
            return Err(ApiError::Unauthorized);
        }
        Ok(Self::session("access-1", "refresh-1"))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, ApiError> {
        if refresh_token != "refresh-1" {
            return Err(ApiError::Unauthorized);
        }
        Ok(Self::session("access-2", "refresh-2"))
    }

    async fn me(&self) -> Result<UserAccount, ApiError> {
        Ok(Self::admin())
    }
}
