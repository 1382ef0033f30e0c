//! # Axum Helpers
//!
//! Shared building blocks for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router composition, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`errors`]**: Structured error responses with error codes
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router(Router::new()).merge(health_router(app_info!()));
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    create_app, create_router, health_router, serve, shutdown_signal, HealthResponse,
    ShutdownCoordinator,
};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};
