use std::sync::Mutex;
use std::time::Duration;

use pdf_library::{
    delivery::{probe::run_diagnostic, DeliveryEvent, MemoryLog, ProbeOutcome, Prober},
    Catalog,
};
use tokio::time::Instant;

/// Records when each probe happened; filenames containing "CERFA" are missing.
struct ClockProber {
    calls: Mutex<Vec<(String, Instant)>>,
}

impl Prober for ClockProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        self.calls.lock().unwrap().push((url.to_string(), Instant::now()));
        if url.contains("CERFA") {
            ProbeOutcome::from_status(url, 404)
        } else {
            ProbeOutcome::from_status(url, 200)
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_batch_probes_each_entry_once_with_delay() {
    let catalog = Catalog::builtin();
    let prober = ClockProber { calls: Mutex::new(Vec::new()) };
    let log = MemoryLog::new();
    let delay = Duration::from_millis(100);
    let mut snapshots = Vec::new();

    let report = run_diagnostic(&catalog, "http://docs.local", &prober, delay, &log, |r| {
        snapshots.push(r.entries.len())
    })
    .await;

    let calls = prober.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), catalog.len());
    assert_eq!(report.entries.len(), catalog.len());

    for pair in calls.windows(2) {
        assert!(pair[1].1 - pair[0].1 >= delay);
    }

    // progress saw 1, 2, ..., N
    assert_eq!(snapshots, (1..=catalog.len()).collect::<Vec<_>>());

    // catalog order
    for (entry, doc) in report.entries.iter().zip(catalog.records()) {
        assert_eq!(entry.filename, doc.filename);
    }

    assert!(report.is_complete());
    assert_eq!(report.success_count() + report.error_count(), catalog.len());
    assert!(matches!(
        log.events().last(),
        Some(DeliveryEvent::DiagnosticFinished { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_missing_documents_produce_recommendations() {
    let catalog = Catalog::from_yaml(
        r#"
documents:
  - id: plan
    title: Plan de situation
    filename: PLAN
    category: permis-amenager
  - id: cerfa
    title: Formulaire CERFA
    filename: CERFA_13409
    category: permis-amenager
"#,
    )
    .unwrap();
    let prober = ClockProber { calls: Mutex::new(Vec::new()) };
    let log = MemoryLog::new();

    let report = run_diagnostic(
        &catalog,
        "http://docs.local",
        &prober,
        Duration::from_millis(100),
        &log,
        |_| {},
    )
    .await;

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.entries[1].outcome.status_code, Some(404));
    assert_eq!(report.entries[1].path, "/PDF/CERFA_13409.pdf");
    assert!(!report.recommendations().is_empty());
    assert!(!report.recommendations().contains(&"All documents are reachable"));
}
