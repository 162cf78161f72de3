pub mod cli;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::cv;
pub use modules::profile;
pub use modules::project;

#[cfg(test)]
mod tests;
