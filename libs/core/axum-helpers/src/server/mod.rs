//! Server infrastructure module.
//!
//! This module provides:
//! - Router composition with tracing, security headers and compression
//! - The `/health` liveness endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let app = create_router(routes).merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router, serve};
pub use health::{health_handler, health_router, HealthResponse};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
