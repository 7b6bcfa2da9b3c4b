mod diagnostic;
mod http_prober;

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use diagnostic::{run_diagnostic, DiagnosticEntry, DiagnosticReport};
pub use http_prober::HttpProber;

/// Result of one existence check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeOutcome {
    pub url: String,
    pub reachable: bool,
    /// `None` when no HTTP response came back at all.
    pub status_code: Option<u16>,
    pub probed_at: DateTime<Utc>,
}

impl ProbeOutcome {
    pub fn from_status(url: &str, status: u16) -> Self {
        Self {
            url: url.to_string(),
            reachable: (200..300).contains(&status),
            status_code: Some(status),
            probed_at: Utc::now(),
        }
    }

    pub fn no_response(url: &str) -> Self {
        Self {
            url: url.to_string(),
            reachable: false,
            status_code: None,
            probed_at: Utc::now(),
        }
    }

    /// Short label for lists: `200`, `404`, or `no response`.
    pub fn status_label(&self) -> String {
        self.status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no response".to_string())
    }
}

/// Lightweight reachability check. Failures are folded into the outcome.
pub trait Prober: Send + Sync {
    fn probe(&self, url: &str) -> impl Future<Output = ProbeOutcome> + Send;
}
