pub mod app_error_impl;
pub mod app_state;
pub mod download_impl;
pub mod routes;
pub mod session;
