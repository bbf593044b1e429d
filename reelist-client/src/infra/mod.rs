//! Infrastructure module containing the HTTP plumbing and service wiring
//!
//! This module provides foundational services used by every store

pub mod api_client;
pub mod constants;
pub mod service_registry;
pub mod services;
pub mod session;
pub mod testing;

// Re-export commonly used items
pub use api_client::{ApiClient, HttpStatusError};
pub use service_registry::ServiceRegistry;
pub use session::{AuthSession, SessionState, SessionUser};
