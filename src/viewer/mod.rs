pub mod external;

mod session;
mod settings;

use std::future::Future;

use crate::delivery::strategy::{DeliveryStrategy, FailureSignal, NativeTagKind};

pub use external::BrowserPresenter;
pub use session::{SessionOutcome, SessionReport, ViewerSession};
pub use settings::ViewSettings;

/// Everything a presenter needs to show one document with one strategy.
#[derive(Debug, Clone)]
pub struct PresentRequest<'a> {
    pub strategy: DeliveryStrategy,
    pub native_tag: NativeTagKind,
    /// Absolute URL of the PDF.
    pub url: &'a str,
    pub title: &'a str,
    pub settings: &'a ViewSettings,
}

/// Performs a delivery strategy.
pub trait Presenter: Send + Sync {
    fn present(&self, request: &PresentRequest<'_>) -> impl Future<Output = Result<(), FailureSignal>> + Send;

    /// Whether this presenter reports failures itself for `strategy`.
    /// When it does not, the session runs it under the watchdog.
    fn reports_failure(&self, strategy: DeliveryStrategy) -> bool {
        let _ = strategy;
        true
    }
}
