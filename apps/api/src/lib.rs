pub mod adapters;
pub mod application;
pub mod infra;

// Test utilities (in-memory ports and state builders for route tests)
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
