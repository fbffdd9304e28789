pub mod app_error;
pub mod export;
pub mod use_cases;
pub mod validators;
