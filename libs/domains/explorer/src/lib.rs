//! Explorer Domain
//!
//! Hosts an interactive API documentation viewer (Swagger UI) next to a
//! service's OpenAPI document.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Handlers    │  ← viewer page, initializer script, schema, assets
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │ Bootstrapper │  ← builds the single ViewerConfig at startup
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Models     │  ← ViewerConfig, sort orders, presets, plugins
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_explorer::{handlers, Bootstrapper, ExplorerState, SchemaSource};
//! use utoipa::openapi::OpenApiBuilder;
//!
//! let viewer = Bootstrapper::new().start();
//! let schema = SchemaSource::embedded(OpenApiBuilder::new().build());
//! let state = ExplorerState::new(viewer, &schema).unwrap();
//!
//! let router = handlers::router(state);
//! ```

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod initializer;
pub mod models;
pub mod schema;

// Re-export commonly used types
pub use bootstrap::Bootstrapper;
pub use error::{ExplorerError, ExplorerResult};
pub use handlers::ExplorerState;
pub use initializer::render_initializer;
pub use models::{EXPLORER_PATH, Layout, Plugin, Preset, SCHEMA_URL, SortOrder, ViewerConfig};
pub use schema::SchemaSource;
