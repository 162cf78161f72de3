pub mod auth;
pub mod chatbot;
pub mod contact;
pub mod cv;
pub mod dashboard;
pub mod gallery;
pub mod profile;
pub mod project;
