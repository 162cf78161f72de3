use crate::modules::auth::application::session::SessionStore;

pub trait ILogoutUseCase: Send + Sync {
    fn execute(&self);
}

/// Forgets the session locally. The backend keeps no session to end.
pub struct LogoutUseCase {
    session: SessionStore,
}

impl LogoutUseCase {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl ILogoutUseCase for LogoutUseCase {
    fn execute(&self) {
        self.session.clear();
        tracing::info!("Logged out");
    }
}
