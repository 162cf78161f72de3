pub mod fetch_current_user;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
