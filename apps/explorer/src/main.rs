use axum_helpers::server::create_app;
use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_explorer::{Bootstrapper, SchemaSource};
use eyre::WrapErr;
use std::fs;
use tracing::info;

mod app;
mod cli;
mod config;
mod openapi;

use cli::{Cli, Command, ExportArgs, ExportFormat};
use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let schema = app::load_schema(&config.explorer)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, schema).await,
        Command::Export(args) => export(&schema, &args),
    }
}

async fn serve(config: Config, schema: SchemaSource) -> eyre::Result<()> {
    let bootstrapper = Bootstrapper::new();
    let viewer = bootstrapper.start();

    let router = app::build_router(config.app, viewer, &schema)?;

    info!(
        "Explorer available at http://{}/explorer/",
        config.server.address()
    );
    create_app(router, &config.server)
        .await
        .wrap_err("Server error")?;

    info!("Explorer shutdown complete");
    Ok(())
}

fn export(schema: &SchemaSource, args: &ExportArgs) -> eyre::Result<()> {
    let document = match args.format {
        ExportFormat::Json => schema.to_json()?,
        ExportFormat::Yaml => schema.to_yaml()?,
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, document)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Schema document exported");
        }
        None => println!("{document}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use utoipa::OpenApi;

    fn embedded() -> SchemaSource {
        SchemaSource::embedded(openapi::ApiDoc::openapi())
    }

    #[test]
    fn test_export_yaml_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("specs").join("swagger.yaml");

        export(
            &embedded(),
            &ExportArgs {
                format: ExportFormat::Yaml,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("openapi:"));
        assert!(written.contains("/health"));
    }

    #[test]
    fn test_export_json_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let output: PathBuf = dir.path().join("swagger.json");

        export(
            &embedded(),
            &ExportArgs {
                format: ExportFormat::Json,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(doc["info"]["title"], "explorer");
    }
}
