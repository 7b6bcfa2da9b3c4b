use std::sync::Arc;
use std::time::Duration;

use pdf_library::{
    delivery::{
        probe::{run_diagnostic, HttpProber},
        strategy::{DeliveryStrategy, Environment, FailureSignal, NativeTagKind},
        DeliveryLog,
    },
    viewer::{BrowserPresenter, PresentRequest, Presenter, ViewSettings, ViewerSession},
    Catalog, DocumentRecord,
};

use crate::event::{AppEvent, AppEventSender};

/// Shared handles needed by background work.
#[derive(Clone)]
pub struct TaskContext {
    pub host: String,
    pub environment: Environment,
    pub watchdog: Duration,
    pub probe_first: bool,
    pub probe_delay: Duration,
    pub presenter: Arc<BrowserPresenter>,
    pub prober: Arc<HttpProber>,
    pub log: Arc<dyn DeliveryLog>,
    pub sender: AppEventSender,
}

impl TaskContext {
    pub fn spawn_session(&self, session: u64, record: DocumentRecord, settings: ViewSettings) {
        let ctx = self.clone();
        tokio::spawn(async move {
            let viewer = ViewerSession::new(record, ctx.host.clone(), ctx.environment.clone(), ctx.log.clone())
                .with_watchdog(ctx.watchdog)
                .with_probe_first(ctx.probe_first)
                .with_settings(settings);
            let report = viewer.run(ctx.presenter.as_ref(), ctx.prober.as_ref()).await;
            ctx.sender.send(AppEvent::SessionFinished(session, Box::new(report)));
        });
    }

    pub fn spawn_download(&self, url: String, title: String) {
        let ctx = self.clone();
        tokio::spawn(async move {
            let message = match ctx.presenter.download(&url, &title).await {
                Ok(path) => format!("Saved {}", path.display()),
                Err(e) => format!("Download failed: {} ({})", e, url),
            };
            ctx.sender.send(AppEvent::ActionFinished(message));
        });
    }

    pub fn spawn_open_externally(&self, url: String, title: String) {
        let ctx = self.clone();
        tokio::spawn(async move {
            let settings = ViewSettings::default();
            let request = PresentRequest {
                strategy: DeliveryStrategy::NewTab,
                native_tag: NativeTagKind::Object,
                url: &url,
                title: &title,
                settings: &settings,
            };
            let result = match tokio::time::timeout(ctx.watchdog, ctx.presenter.present(&request)).await {
                Ok(result) => result,
                Err(_) => Err(FailureSignal::WatchdogTimeout(ctx.watchdog)),
            };
            let message = match result {
                Ok(()) => format!("Opened {}", url),
                Err(signal) => format!("Could not open {} ({})", url, signal),
            };
            ctx.sender.send(AppEvent::ActionFinished(message));
        });
    }

    pub fn spawn_diagnostic(&self, catalog: Catalog) {
        let ctx = self.clone();
        tokio::spawn(async move {
            let progress_sender = ctx.sender.clone();
            let report = run_diagnostic(
                &catalog,
                &ctx.host,
                ctx.prober.as_ref(),
                ctx.probe_delay,
                ctx.log.as_ref(),
                move |report| progress_sender.send(AppEvent::DiagnosticProgress(report.clone())),
            )
            .await;
            ctx.sender.send(AppEvent::DiagnosticFinished(report));
        });
    }
}
