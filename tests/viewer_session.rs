use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pdf_library::{
    delivery::{
        strategy::{DeliveryStrategy, Environment, FailureSignal, NativeTagKind},
        DeliveryEvent, MemoryLog, ProbeOutcome, Prober,
    },
    error::ErrorKind,
    viewer::{BrowserPresenter, PresentRequest, Presenter, SessionOutcome, ViewerSession},
    Catalog, LibraryError,
};

const HOST: &str = "http://docs.local";

/// Answers each strategy from a queue of scripted results. NewTab never
/// reports failure itself, so an empty NewTab script hangs.
struct ScriptedPresenter {
    script: Mutex<HashMap<DeliveryStrategy, VecDeque<Result<(), FailureSignal>>>>,
    calls: Mutex<Vec<(DeliveryStrategy, NativeTagKind, String)>>,
}

impl ScriptedPresenter {
    fn new(script: Vec<(DeliveryStrategy, Result<(), FailureSignal>)>) -> Self {
        let mut map: HashMap<DeliveryStrategy, VecDeque<_>> = HashMap::new();
        for (strategy, result) in script {
            map.entry(strategy).or_default().push_back(result);
        }
        Self {
            script: Mutex::new(map),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(DeliveryStrategy, NativeTagKind, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Presenter for ScriptedPresenter {
    async fn present(&self, request: &PresentRequest<'_>) -> Result<(), FailureSignal> {
        self.calls
            .lock()
            .unwrap()
            .push((request.strategy, request.native_tag, request.url.to_string()));

        let next = self
            .script
            .lock()
            .unwrap()
            .get_mut(&request.strategy)
            .and_then(|queue| queue.pop_front());

        match next {
            Some(result) => result,
            None => {
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }

    fn reports_failure(&self, strategy: DeliveryStrategy) -> bool {
        strategy != DeliveryStrategy::NewTab
    }
}

struct TableProber {
    statuses: HashMap<String, u16>,
}

impl TableProber {
    fn all_ok() -> Self {
        Self {
            statuses: HashMap::new(),
        }
    }

    fn with(statuses: &[(&str, u16)]) -> Self {
        Self {
            statuses: statuses.iter().map(|(u, s)| (u.to_string(), *s)).collect(),
        }
    }
}

impl Prober for TableProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let status = if self.statuses.is_empty() {
            200
        } else {
            self.statuses.get(url).copied().unwrap_or(404)
        };
        ProbeOutcome::from_status(url, status)
    }
}

fn enedis_session(environment: Environment, log: Arc<MemoryLog>) -> ViewerSession {
    let catalog = Catalog::builtin();
    let record = catalog.record_for_navigation("ENEDIS");
    ViewerSession::new(record, HOST, environment, log)
}

#[tokio::test]
async fn test_falls_through_every_strategy_in_order() {
    let presenter = ScriptedPresenter::new(vec![
        (DeliveryStrategy::Inline, Err(FailureSignal::RenderError("frame refused".into()))),
        (DeliveryStrategy::NativeTag, Err(FailureSignal::ElementError("object".into()))),
        (DeliveryStrategy::NativeTag, Err(FailureSignal::ElementError("embed".into()))),
        (DeliveryStrategy::NewTab, Err(FailureSignal::Unavailable("no browser".into()))),
        (DeliveryStrategy::Download, Err(FailureSignal::Unavailable("disk full".into()))),
    ]);
    let log = Arc::new(MemoryLog::new());
    let session = enedis_session(Environment::new("docs.local"), log.clone());

    let report = session.run(&presenter, &TableProber::all_ok()).await;

    assert_eq!(report.outcome, SessionOutcome::Exhausted);
    assert_eq!(report.visited, DeliveryStrategy::ORDER.to_vec());
    assert_eq!(report.absolute_url, "http://docs.local/PPVE/ENEDIS.pdf");

    let calls: Vec<_> = presenter.calls().into_iter().map(|(s, t, _)| (s, t)).collect();
    assert_eq!(
        calls,
        vec![
            (DeliveryStrategy::Inline, NativeTagKind::Object),
            (DeliveryStrategy::NativeTag, NativeTagKind::Object),
            (DeliveryStrategy::NativeTag, NativeTagKind::Embed),
            (DeliveryStrategy::NewTab, NativeTagKind::Embed),
            (DeliveryStrategy::Download, NativeTagKind::Embed),
        ]
    );

    assert_eq!(report.errors.len(), 5);
    assert!(report.errors.iter().all(|e| e.kind() == ErrorKind::RenderBlocked));
    assert!(!report.recovery_actions().is_empty());

    let events = log.events();
    assert!(events.contains(&DeliveryEvent::NativeTagSwapped {
        from: NativeTagKind::Object,
        to: NativeTagKind::Embed,
    }));
    assert!(matches!(events.last(), Some(DeliveryEvent::Exhausted { .. })));
}

#[tokio::test]
async fn test_stops_at_first_success() {
    let presenter = ScriptedPresenter::new(vec![
        (DeliveryStrategy::Inline, Err(FailureSignal::RenderError("blocked".into()))),
        (DeliveryStrategy::NativeTag, Ok(())),
    ]);
    let log = Arc::new(MemoryLog::new());
    let session = enedis_session(Environment::new("docs.local"), log);

    let report = session.run(&presenter, &TableProber::all_ok()).await;

    assert_eq!(report.outcome, SessionOutcome::Delivered(DeliveryStrategy::NativeTag));
    assert!(report.is_delivered());
    assert!(report.recovery_actions().is_empty());
    assert_eq!(presenter.calls().len(), 2);
}

#[tokio::test]
async fn test_restricted_host_starts_at_download() {
    let presenter = ScriptedPresenter::new(vec![(DeliveryStrategy::Download, Ok(()))]);
    let log = Arc::new(MemoryLog::new());
    let environment =
        Environment::new("intranet.example.org").with_restricted_hosts(vec!["example.org".into()]);
    let session = enedis_session(environment, log.clone());

    let report = session.run(&presenter, &TableProber::all_ok()).await;

    assert_eq!(report.outcome, SessionOutcome::Delivered(DeliveryStrategy::Download));
    assert_eq!(report.visited, vec![DeliveryStrategy::Download]);
    assert_eq!(presenter.calls().len(), 1);
    assert!(matches!(report.errors.first(), Some(LibraryError::EnvironmentRestricted(_))));
    assert!(log
        .events()
        .iter()
        .any(|e| matches!(e, DeliveryEvent::Restricted { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_watchdog_fails_silent_new_tab() {
    // no NewTab entry: the presenter hangs until the watchdog fires
    let presenter = ScriptedPresenter::new(vec![
        (DeliveryStrategy::Inline, Err(FailureSignal::RenderError("blocked".into()))),
        (DeliveryStrategy::NativeTag, Err(FailureSignal::RenderError("no plugin".into()))),
        (DeliveryStrategy::Download, Ok(())),
    ]);
    let log = Arc::new(MemoryLog::new());
    let session =
        enedis_session(Environment::new("docs.local"), log).with_watchdog(Duration::from_secs(8));

    let start = tokio::time::Instant::now();
    let report = session.run(&presenter, &TableProber::all_ok()).await;

    assert_eq!(report.outcome, SessionOutcome::Delivered(DeliveryStrategy::Download));
    assert!(start.elapsed() >= Duration::from_secs(8));
    assert!(report.errors.iter().any(|e| matches!(
        e,
        LibraryError::RenderBlocked { strategy: DeliveryStrategy::NewTab, reason } if reason.contains("8s")
    )));
}

#[tokio::test]
async fn test_unreachable_document_skips_presenters() {
    let presenter = ScriptedPresenter::new(vec![(DeliveryStrategy::Inline, Ok(()))]);
    let log = Arc::new(MemoryLog::new());
    let session = enedis_session(Environment::new("docs.local"), log);
    let prober = TableProber::with(&[("http://docs.local/elsewhere.pdf", 200)]);

    let report = session.run(&presenter, &prober).await;

    assert_eq!(report.outcome, SessionOutcome::Unreachable);
    assert!(presenter.calls().is_empty());
    assert_eq!(report.location.url, "/PPVE/ENEDIS.pdf");
    match report.errors.as_slice() {
        [LibraryError::ResourceUnreachable { url, status }] => {
            assert_eq!(url, "/PPVE/ENEDIS.pdf");
            assert_eq!(*status, Some(404));
        }
        other => panic!("unexpected errors: {:?}", other),
    }
}

#[tokio::test]
async fn test_document_found_under_fallback_directory() {
    let presenter = ScriptedPresenter::new(vec![(DeliveryStrategy::Inline, Ok(()))]);
    let log = Arc::new(MemoryLog::new());
    let session = enedis_session(Environment::new("docs.local"), log);
    let prober = TableProber::with(&[("http://docs.local/PDF/ENEDIS.pdf", 200)]);

    let report = session.run(&presenter, &prober).await;

    assert!(report.is_delivered());
    assert_eq!(report.absolute_url, "http://docs.local/PDF/ENEDIS.pdf");
    assert_eq!(presenter.calls()[0].2, "http://docs.local/PDF/ENEDIS.pdf");
}

#[tokio::test]
async fn test_unprobed_session_uses_canonical_path() {
    let presenter = ScriptedPresenter::new(vec![(DeliveryStrategy::Inline, Ok(()))]);
    let log = Arc::new(MemoryLog::new());
    let session = enedis_session(Environment::new("docs.local"), log.clone()).with_probe_first(false);
    // would report everything missing if consulted
    let prober = TableProber::with(&[("unused", 200)]);

    let report = session.run(&presenter, &prober).await;

    assert!(report.is_delivered());
    assert!(!log.events().iter().any(|e| matches!(e, DeliveryEvent::Probed { .. })));
}

#[tokio::test]
async fn test_embedded_download_from_silent_host_ends_the_session() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    // accept, then never answer
    std::thread::spawn(move || {
        let (_stream, _) = listener.accept().unwrap();
        std::thread::sleep(Duration::from_secs(10));
    });

    let dir = tempfile::tempdir().unwrap();
    let presenter = BrowserPresenter::new(
        dir.path().join("viewer"),
        dir.path().join("downloads"),
        Duration::from_millis(500),
    )
    .unwrap();

    let record = Catalog::builtin().record_for_navigation("ENEDIS");
    let log = Arc::new(MemoryLog::new());
    let session = ViewerSession::new(
        record,
        format!("http://{addr}"),
        Environment::new("127.0.0.1").with_embedded(true),
        log,
    )
    .with_watchdog(Duration::from_secs(2))
    .with_probe_first(false);

    let report = tokio::time::timeout(Duration::from_secs(10), session.run(&presenter, &TableProber::all_ok()))
        .await
        .expect("session finished");

    assert_eq!(report.outcome, SessionOutcome::Exhausted);
    assert_eq!(report.visited, vec![DeliveryStrategy::Download]);
    assert!(report.errors.iter().any(|e| matches!(
        e,
        LibraryError::RenderBlocked { strategy: DeliveryStrategy::Download, .. }
    )));
    assert!(!report.recovery_actions().is_empty());
}
