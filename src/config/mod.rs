mod load;
mod validate;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use validate::ValidationError;

pub const DEFAULT_CONFIG_FILE: &str = "library.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Base URL of the static file host.
    pub host: String,
    pub probe_timeout_ms: u64,
    /// Pause between two probes of a catalog diagnostic.
    pub probe_delay_ms: u64,
    pub watchdog_secs: u64,
    /// Upper bound on a whole download, body included.
    pub download_timeout_secs: u64,
    /// Probe candidate paths before opening a document.
    pub probe_before_view: bool,
    pub download_dir: PathBuf,
    /// Where generated viewer pages are written.
    pub viewer_dir: PathBuf,
    pub restricted_hosts: Vec<String>,
    pub embedded: bool,
    /// YAML catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:3000".to_string(),
            probe_timeout_ms: 3000,
            probe_delay_ms: 100,
            watchdog_secs: 8,
            download_timeout_secs: 60,
            probe_before_view: true,
            download_dir: PathBuf::from("./downloads"),
            viewer_dir: std::env::temp_dir().join("pdf_library_viewer"),
            restricted_hosts: Vec::new(),
            embedded: false,
            catalog: None,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl LibraryConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }

    pub fn watchdog(&self) -> Duration {
        Duration::from_secs(self.watchdog_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}
