//! OCS subscriber usage report service
//!
//! Pulls subscriber, prepaid package and weekly usage data from the OCS API
//! and flattens it into one tabular report per account.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::reports;
pub use modules::subscribers;
pub use modules::AppState;
