use std::time::Duration;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::delivery::{
    observe::{DeliveryEvent, DeliveryLog},
    resolver::{absolute_url, resolve},
};

use super::{ProbeOutcome, Prober};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    pub filename: String,
    pub title: String,
    /// Resolved path, relative to the host.
    pub path: String,
    pub outcome: ProbeOutcome,
}

/// Accumulated results of a catalog-wide reachability check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub entries: Vec<DiagnosticEntry>,
    pub total: usize,
}

impl DiagnosticReport {
    pub fn new(total: usize) -> Self {
        Self { entries: Vec::with_capacity(total), total }
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.reachable).count()
    }

    pub fn error_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.total
    }

    pub fn recommendations(&self) -> Vec<&'static str> {
        if !self.is_complete() {
            return Vec::new();
        }

        let mut tips = Vec::new();
        if self.error_count() > 0 {
            tips.push("Check that every PDF was uploaded to the expected public directory (/PPVE or /PDF)");
            tips.push("Check file permissions on the host (644 for files, 755 for directories)");
            tips.push("Make sure file names match the catalog exactly, including case");
        }
        if self.total > 0 && self.success_count() == self.total {
            tips.push("All documents are reachable");
        }
        tips
    }
}

/// Probe every catalog entry one at a time, in catalog order, sleeping
/// `delay` between successive probes. `progress` sees the report after each
/// append, so its length always equals the number of completed probes.
pub async fn run_diagnostic<P, F>(
    catalog: &Catalog,
    host: &str,
    prober: &P,
    delay: Duration,
    log: &dyn DeliveryLog,
    mut progress: F,
) -> DiagnosticReport
where
    P: Prober,
    F: FnMut(&DiagnosticReport) + Send,
{
    let mut report = DiagnosticReport::new(catalog.len());

    for (i, doc) in catalog.records().iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let path = resolve(&doc.filename, doc.category);
        let outcome = prober.probe(&absolute_url(host, &path)).await;
        log.record(DeliveryEvent::Probed {
            url: path.clone(),
            reachable: outcome.reachable,
            status: outcome.status_code,
        });

        report.entries.push(DiagnosticEntry {
            filename: doc.filename.clone(),
            title: doc.title.clone(),
            path,
            outcome,
        });
        progress(&report);
    }

    log.record(DeliveryEvent::DiagnosticFinished {
        reachable: report.success_count(),
        unreachable: report.error_count(),
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, DocumentRecord};
    use crate::delivery::observe::NullLog;

    struct AlwaysOk;

    impl Prober for AlwaysOk {
        async fn probe(&self, url: &str) -> ProbeOutcome {
            ProbeOutcome::from_status(url, 200)
        }
    }

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            DocumentRecord {
                id: "a".into(),
                title: "A".into(),
                filename: "A".into(),
                category: Category::Ppve,
            },
            DocumentRecord {
                id: "b".into(),
                title: "B".into(),
                filename: "B".into(),
                category: Category::Additional,
            },
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_report_paths_follow_categories() {
        let report = run_diagnostic(
            &small_catalog(),
            "http://h",
            &AlwaysOk,
            Duration::ZERO,
            &NullLog,
            |_| {},
        )
        .await;

        assert!(report.is_complete());
        assert_eq!(report.entries[0].path, "/PPVE/A.pdf");
        assert_eq!(report.entries[1].path, "/PDF/B.pdf");
        assert_eq!(report.entries[0].outcome.url, "http://h/PPVE/A.pdf");
        assert_eq!(report.recommendations(), vec!["All documents are reachable"]);
    }

    #[test]
    fn test_partial_report_has_no_recommendations() {
        let report = DiagnosticReport::new(3);
        assert!(report.recommendations().is_empty());
    }

    #[tokio::test]
    async fn test_report_serializes_for_machine_output() {
        let report = run_diagnostic(
            &small_catalog(),
            "http://h",
            &AlwaysOk,
            Duration::ZERO,
            &NullLog,
            |_| {},
        )
        .await;

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["entries"][0]["path"], "/PPVE/A.pdf");
        assert_eq!(value["entries"][0]["outcome"]["reachable"], true);
        assert_eq!(value["entries"][1]["outcome"]["status_code"], 200);
        assert!(value["entries"][1]["outcome"]["probed_at"].is_string());
    }
}
