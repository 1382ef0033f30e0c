use axum::{
    Router,
    body::{Body, Bytes},
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ExplorerError, ExplorerResult};
use crate::initializer::{INITIALIZER_FILE, render_initializer};
use crate::models::{EXPLORER_PATH, ViewerConfig};
use crate::schema::SchemaSource;

/// Everything the explorer routes serve, prepared once at startup.
#[derive(Clone)]
pub struct ExplorerState {
    viewer: Arc<ViewerConfig>,
    widget: Arc<utoipa_swagger_ui::Config<'static>>,
    initializer: Bytes,
    schema: Bytes,
}

impl ExplorerState {
    /// Renders the initializer and serializes the schema document.
    pub fn new(viewer: Arc<ViewerConfig>, schema: &SchemaSource) -> ExplorerResult<Self> {
        Ok(Self {
            widget: Arc::new(viewer.to_swagger_config()),
            initializer: Bytes::from(render_initializer(&viewer)),
            schema: schema.to_bytes()?,
            viewer,
        })
    }

    pub fn viewer(&self) -> &ViewerConfig {
        &self.viewer
    }
}

/// Create the explorer router: viewer page, initializer, schema, assets.
pub fn router(state: ExplorerState) -> Router {
    let schema_url = state.viewer.url().to_string();

    Router::new()
        .route(EXPLORER_PATH, get(redirect_to_index))
        .route(&format!("{EXPLORER_PATH}/"), get(index))
        .route(&format!("{EXPLORER_PATH}/{INITIALIZER_FILE}"), get(initializer))
        .route(&schema_url, get(schema_document))
        .route(&format!("{EXPLORER_PATH}/{{*file}}"), get(asset))
        .with_state(state)
}

/// Sends the bare mount path to the index page with a 302.
async fn redirect_to_index() -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("{EXPLORER_PATH}/"))],
    )
        .into_response()
}

async fn index(State(state): State<ExplorerState>) -> Result<Response, ExplorerError> {
    serve_widget_file("index.html", &state)
}

async fn initializer(State(state): State<ExplorerState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        state.initializer,
    )
        .into_response()
}

async fn schema_document(State(state): State<ExplorerState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        state.schema,
    )
        .into_response()
}

async fn asset(
    Path(file): Path<String>,
    State(state): State<ExplorerState>,
) -> Result<Response, ExplorerError> {
    serve_widget_file(&file, &state)
}

fn serve_widget_file(file: &str, state: &ExplorerState) -> ExplorerResult<Response> {
    let served = utoipa_swagger_ui::serve(file, Arc::clone(&state.widget)).map_err(|e| {
        ExplorerError::Asset {
            path: file.to_string(),
            reason: e.to_string(),
        }
    })?;

    let Some(found) = served else {
        return Err(ExplorerError::AssetNotFound(file.to_string()));
    };

    debug!(file, content_type = %found.content_type, "Serving viewer asset");
    let body = match found.bytes {
        Cow::Borrowed(bytes) => Body::from(Bytes::from_static(bytes)),
        Cow::Owned(bytes) => Body::from(bytes),
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, found.content_type)],
        body,
    )
        .into_response())
}
