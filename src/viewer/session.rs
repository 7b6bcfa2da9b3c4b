use std::sync::Arc;
use std::time::Duration;

use crate::catalog::DocumentRecord;
use crate::delivery::{
    location::{locate, ResolvedLocation},
    observe::{DeliveryEvent, DeliveryLog},
    probe::Prober,
    resolver::absolute_url,
    strategy::{
        DeliveryStrategy, Environment, FailureSignal, StrategySelector, Transition,
        ViewerAttemptState,
    },
};
use crate::error::{LibraryError, RecoveryAction};

use super::{PresentRequest, Presenter, ViewSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Delivered(DeliveryStrategy),
    /// The probe found nothing at any candidate path.
    Unreachable,
    /// Every strategy failed.
    Exhausted,
}

#[derive(Debug)]
pub struct SessionReport {
    pub title: String,
    pub location: ResolvedLocation,
    pub absolute_url: String,
    pub outcome: SessionOutcome,
    /// Every error surfaced along the way, oldest first.
    pub errors: Vec<LibraryError>,
    pub attempt: ViewerAttemptState,
    pub visited: Vec<DeliveryStrategy>,
}

impl SessionReport {
    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, SessionOutcome::Delivered(_))
    }

    /// Manual actions left once automation stops.
    pub fn recovery_actions(&self) -> Vec<RecoveryAction> {
        match self.outcome {
            SessionOutcome::Delivered(_) => Vec::new(),
            SessionOutcome::Exhausted => {
                vec![RecoveryAction::OpenExternally, RecoveryAction::Download]
            }
            SessionOutcome::Unreachable => self
                .errors
                .last()
                .map(|e| e.recovery_actions())
                .unwrap_or_else(|| vec![RecoveryAction::Download, RecoveryAction::OpenExternally]),
        }
    }
}

/// One attempt at showing one document. Create a new session each time a
/// document is opened.
#[derive(Clone)]
pub struct ViewerSession {
    record: DocumentRecord,
    host: String,
    environment: Environment,
    watchdog: Duration,
    probe_first: bool,
    settings: ViewSettings,
    log: Arc<dyn DeliveryLog>,
}

impl ViewerSession {
    pub fn new(
        record: DocumentRecord,
        host: impl Into<String>,
        environment: Environment,
        log: Arc<dyn DeliveryLog>,
    ) -> Self {
        Self {
            record,
            host: host.into(),
            environment,
            watchdog: Duration::from_secs(8),
            probe_first: true,
            settings: ViewSettings::default(),
            log,
        }
    }

    pub fn with_watchdog(mut self, watchdog: Duration) -> Self {
        self.watchdog = watchdog;
        self
    }

    pub fn with_probe_first(mut self, probe_first: bool) -> Self {
        self.probe_first = probe_first;
        self
    }

    pub fn with_settings(mut self, settings: ViewSettings) -> Self {
        self.settings = settings;
        self
    }

    pub async fn run<P, Q>(&self, presenter: &P, prober: &Q) -> SessionReport
    where
        P: Presenter,
        Q: Prober,
    {
        let log = self.log.as_ref();
        let mut errors = Vec::new();

        let location = if self.probe_first {
            locate(prober, &self.host, &self.record, log).await
        } else {
            let location = ResolvedLocation::for_record(&self.record);
            log.record(DeliveryEvent::Resolved {
                filename: self.record.filename.clone(),
                url: location.url.clone(),
            });
            location
        };
        let url = absolute_url(&self.host, &location.url);

        if location.is_unreachable() {
            errors.push(LibraryError::ResourceUnreachable {
                url: location.url.clone(),
                status: location.status,
            });
            return self.report(location, url, SessionOutcome::Unreachable, errors, None);
        }

        let mut selector = StrategySelector::new(&self.environment);
        if let Some(reason) = self.environment.restriction() {
            log.record(DeliveryEvent::Restricted { reason: reason.clone() });
            errors.push(LibraryError::EnvironmentRestricted(reason));
        }

        while let Some(strategy) = selector.current() {
            log.record(DeliveryEvent::StrategyStarted { strategy });

            let request = PresentRequest {
                strategy,
                native_tag: selector.native_tag(),
                url: &url,
                title: &self.record.title,
                settings: &self.settings,
            };

            let result = if presenter.reports_failure(strategy) {
                presenter.present(&request).await
            } else {
                match tokio::time::timeout(self.watchdog, presenter.present(&request)).await {
                    Ok(result) => result,
                    Err(_) => Err(FailureSignal::WatchdogTimeout(self.watchdog)),
                }
            };

            match result {
                Ok(()) => {
                    log.record(DeliveryEvent::Delivered { strategy, url: url.clone() });
                    let outcome = SessionOutcome::Delivered(strategy);
                    return self.report(location, url, outcome, errors, Some(&selector));
                }
                Err(signal) => {
                    let reason = signal.to_string();
                    log.record(DeliveryEvent::StrategyFailed { strategy, reason: reason.clone() });
                    errors.push(LibraryError::RenderBlocked { strategy, reason });

                    let previous_tag = selector.native_tag();
                    if let Transition::Retry { tag, .. } = selector.fail(signal) {
                        log.record(DeliveryEvent::NativeTagSwapped { from: previous_tag, to: tag });
                    }
                }
            }
        }

        log.record(DeliveryEvent::Exhausted { url: url.clone() });
        self.report(location, url, SessionOutcome::Exhausted, errors, Some(&selector))
    }

    fn report(
        &self,
        location: ResolvedLocation,
        absolute_url: String,
        outcome: SessionOutcome,
        errors: Vec<LibraryError>,
        selector: Option<&StrategySelector>,
    ) -> SessionReport {
        SessionReport {
            title: self.record.title.clone(),
            location,
            absolute_url,
            outcome,
            errors,
            attempt: selector.map(|s| s.attempt().clone()).unwrap_or_default(),
            visited: selector.map(|s| s.visited().to_vec()).unwrap_or_default(),
        }
    }
}
