use std::sync::Mutex;

use crate::delivery::strategy::{DeliveryStrategy, NativeTagKind};

/// Something worth reporting while a document is being delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryEvent {
    Resolved { filename: String, url: String },
    Probed { url: String, reachable: bool, status: Option<u16> },
    Restricted { reason: String },
    StrategyStarted { strategy: DeliveryStrategy },
    StrategyFailed { strategy: DeliveryStrategy, reason: String },
    NativeTagSwapped { from: NativeTagKind, to: NativeTagKind },
    Delivered { strategy: DeliveryStrategy, url: String },
    Exhausted { url: String },
    DiagnosticFinished { reachable: usize, unreachable: usize },
}

/// Observability collaborator handed to the delivery core.
pub trait DeliveryLog: Send + Sync {
    fn record(&self, event: DeliveryEvent);
}

/// Forwards delivery events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl DeliveryLog for TracingLog {
    fn record(&self, event: DeliveryEvent) {
        match event {
            DeliveryEvent::Resolved { filename, url } => {
                tracing::debug!(%filename, %url, "resolved document");
            }
            DeliveryEvent::Probed { url, reachable: true, status } => {
                tracing::debug!(%url, ?status, "document reachable");
            }
            DeliveryEvent::Probed { url, reachable: false, status } => {
                tracing::warn!(%url, ?status, "document unreachable");
            }
            DeliveryEvent::Restricted { reason } => {
                tracing::info!(%reason, "restricted environment, skipping to download");
            }
            DeliveryEvent::StrategyStarted { strategy } => {
                tracing::debug!(%strategy, "trying strategy");
            }
            DeliveryEvent::StrategyFailed { strategy, reason } => {
                tracing::warn!(%strategy, %reason, "strategy failed");
            }
            DeliveryEvent::NativeTagSwapped { from, to } => {
                tracing::debug!(from = from.tag_name(), to = to.tag_name(), "retrying native tag");
            }
            DeliveryEvent::Delivered { strategy, url } => {
                tracing::info!(%strategy, %url, "document delivered");
            }
            DeliveryEvent::Exhausted { url } => {
                tracing::error!(%url, "all delivery strategies failed");
            }
            DeliveryEvent::DiagnosticFinished { reachable, unreachable } => {
                tracing::info!(reachable, unreachable, "diagnostic finished");
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl DeliveryLog for NullLog {
    fn record(&self, _event: DeliveryEvent) {}
}

/// Keeps every event in memory. Handy for asserting on what happened.
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: Mutex<Vec<DeliveryEvent>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeliveryEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl DeliveryLog for MemoryLog {
    fn record(&self, event: DeliveryEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
