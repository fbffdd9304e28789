pub mod app;
pub mod config;
pub mod downloads;
pub mod error;
pub mod setup;
