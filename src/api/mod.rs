//! Recommendation API Client
//!
//! HTTP bindings for the recommendation service, organized by concern.

mod recommend;
mod transport;

// Re-export all public items
pub use recommend::*;
pub use transport::*;
