use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve an interactive API explorer, or export its schema document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Write the schema document to stdout or a file
    Export(ExportArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Destination file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["explorer"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_export_defaults_to_json_stdout() {
        let cli = Cli::try_parse_from(["explorer", "export"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Export(ExportArgs {
                format: ExportFormat::Json,
                output: None,
            }))
        );
    }

    #[test]
    fn test_export_yaml_to_file() {
        let cli =
            Cli::try_parse_from(["explorer", "export", "-f", "yaml", "-o", "specs/swagger.yaml"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Export(ExportArgs {
                format: ExportFormat::Yaml,
                output: Some(PathBuf::from("specs/swagger.yaml")),
            }))
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["explorer", "export", "--format", "toml"]).is_err());
    }
}
