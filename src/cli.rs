use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pdf-library")]
#[command(about = "Browse, open and download the documents of a static PDF library")]
pub struct Cli {
    /// Path to a YAML config file (defaults to ./library.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive catalog (default).
    Tui,
    /// Print the catalog grouped by category.
    List,
    /// Open a document through the delivery strategy chain.
    View {
        #[arg(value_name = "FILENAME")]
        filename: String,
        /// Skip the reachability probe before opening.
        #[arg(long)]
        no_probe: bool,
    },
    /// Open the resolved URL directly, printing a manual link if that fails.
    Redirect {
        #[arg(value_name = "FILENAME")]
        filename: String,
    },
    /// Save a document into the download directory.
    Download {
        #[arg(value_name = "FILENAME")]
        filename: String,
    },
    /// Probe every catalog entry and report reachability.
    Diagnose {
        /// Print the finished report as JSON instead of progress lines.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_with_filename() {
        let cli = Cli::parse_from(["pdf-library", "view", "ENEDIS", "--no-probe"]);
        match cli.command {
            Some(Commands::View { filename, no_probe }) => {
                assert_eq!(filename, "ENEDIS");
                assert!(no_probe);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::parse_from(["pdf-library", "--config", "lib.yml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("lib.yml")));
    }

    #[test]
    fn test_parse_diagnose_json() {
        let cli = Cli::parse_from(["pdf-library", "diagnose", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Diagnose { json: true })));
    }
}
