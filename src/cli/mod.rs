pub mod app_context;
mod args;
mod commands;
pub mod handlers;

pub use app_context::AppContext;
pub use args::{Cli, Commands, CvCommand, MessageCommand, ProfileCommand, ProjectCommand};
pub use commands::{dispatch, run};
