use axum::body::Bytes;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use utoipa::openapi::OpenApi;

use crate::error::{ExplorerError, ExplorerResult};

/// The schema document served to the viewer.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// Document generated from the service's own `utoipa` annotations.
    Embedded(Box<OpenApi>),
    /// JSON document loaded from disk, served as read.
    File {
        path: PathBuf,
        document: serde_json::Value,
    },
}

impl SchemaSource {
    pub fn embedded(api: OpenApi) -> Self {
        Self::Embedded(Box::new(api))
    }

    /// Loads an external document. Only JSON syntax is checked.
    pub fn from_file(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read(&path).map_err(|source| ExplorerError::SchemaRead {
            path: path.clone(),
            source,
        })?;
        let document = serde_json::from_slice(&raw).map_err(|source| {
            ExplorerError::SchemaParse {
                path: path.clone(),
                source,
            }
        })?;

        info!(path = %path.display(), "Loaded schema document");
        Ok(Self::File { path, document })
    }

    /// Human-readable origin for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded(_) => "embedded".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn to_json(&self) -> ExplorerResult<String> {
        let result = match self {
            Self::Embedded(api) => api.to_pretty_json(),
            Self::File { document, .. } => serde_json::to_string_pretty(document),
        };
        result.map_err(|e| ExplorerError::SchemaSerialize(e.to_string()))
    }

    pub fn to_yaml(&self) -> ExplorerResult<String> {
        let result = match self {
            Self::Embedded(api) => serde_yaml_ng::to_string(&**api),
            Self::File { document, .. } => serde_yaml_ng::to_string(document),
        };
        result.map_err(|e| ExplorerError::SchemaSerialize(e.to_string()))
    }

    /// Compact JSON body served at the schema URL.
    pub fn to_bytes(&self) -> ExplorerResult<Bytes> {
        let result = match self {
            Self::Embedded(api) => api.to_json(),
            Self::File { document, .. } => serde_json::to_string(document),
        };
        result
            .map(Bytes::from)
            .map_err(|e| ExplorerError::SchemaSerialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

    fn sample_api() -> OpenApi {
        OpenApiBuilder::new()
            .info(InfoBuilder::new().title("sample").version("0.1.0").build())
            .build()
    }

    #[test]
    fn test_embedded_serializes_to_json_and_yaml() {
        let source = SchemaSource::embedded(sample_api());

        let json: serde_json::Value = serde_json::from_str(&source.to_json().unwrap()).unwrap();
        assert_eq!(json["info"]["title"], "sample");

        let yaml = source.to_yaml().unwrap();
        assert!(yaml.contains("title: sample"));
        assert_eq!(source.describe(), "embedded");
    }

    #[test]
    fn test_debug_names_the_source() {
        let source = SchemaSource::embedded(sample_api());
        assert!(format!("{source:?}").starts_with("Embedded("));
    }

    #[test]
    fn test_from_file_reads_json_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"openapi":"3.1.0","info":{{"title":"external","version":"2"}}}}"#)
            .unwrap();

        let source = SchemaSource::from_file(file.path()).unwrap();
        let bytes = source.to_bytes().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["info"]["title"], "external");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaSource::from_file(dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, ExplorerError::SchemaRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "openapi: 3.1.0").unwrap();

        let err = SchemaSource::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ExplorerError::SchemaParse { .. }));
    }
}
