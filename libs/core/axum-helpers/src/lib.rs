//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`server`]**: Server setup, router assembly, graceful shutdown
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`middleware`]**: HTTP middleware (Accept-header precondition)

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;
pub mod shutdown;

// Re-export server types
pub use server::{create_production_app, create_router};

// Re-export shutdown types
pub use shutdown::ShutdownCoordinator;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export middleware
pub use middleware::require_json_accept;
