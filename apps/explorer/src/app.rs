use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use domain_explorer::{ExplorerResult, ExplorerState, SchemaSource, ViewerConfig, handlers};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

use crate::config::ExplorerSettings;
use crate::openapi::ApiDoc;

/// Picks the external schema file when configured, the built-in doc otherwise.
pub fn load_schema(settings: &ExplorerSettings) -> ExplorerResult<SchemaSource> {
    match &settings.schema_file {
        Some(path) => SchemaSource::from_file(path),
        None => Ok(SchemaSource::embedded(ApiDoc::openapi())),
    }
}

/// Composes explorer routes, `/health` and the shared middleware stack.
pub fn build_router(
    app: AppInfo,
    viewer: Arc<ViewerConfig>,
    schema: &SchemaSource,
) -> ExplorerResult<Router> {
    let state = ExplorerState::new(viewer, schema)?;
    info!(schema = %schema.describe(), url = state.viewer().url(), "Explorer routes ready");

    let routes = handlers::router(state).merge(health_router(app));
    Ok(create_router(routes))
}
