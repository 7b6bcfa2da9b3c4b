mod environment;
mod selector;

use std::fmt;
use std::time::Duration;

pub use environment::Environment;
pub use selector::{SelectorState, StrategySelector, Transition, ViewerAttemptState};

/// Ways of presenting a document, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeliveryStrategy {
    /// Viewer shell embedding the PDF in an iframe.
    Inline,
    /// Viewer shell using an `<object>` (then `<embed>`) tag.
    NativeTag,
    /// Hand the URL straight to the system browser.
    NewTab,
    /// Save the file locally.
    Download,
}

impl DeliveryStrategy {
    pub const ORDER: [DeliveryStrategy; 4] = [
        DeliveryStrategy::Inline,
        DeliveryStrategy::NativeTag,
        DeliveryStrategy::NewTab,
        DeliveryStrategy::Download,
    ];

    pub fn index(&self) -> usize {
        match self {
            DeliveryStrategy::Inline => 0,
            DeliveryStrategy::NativeTag => 1,
            DeliveryStrategy::NewTab => 2,
            DeliveryStrategy::Download => 3,
        }
    }

    pub fn next(&self) -> Option<DeliveryStrategy> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStrategy::Inline => "inline viewer",
            DeliveryStrategy::NativeTag => "native viewer",
            DeliveryStrategy::NewTab => "new tab",
            DeliveryStrategy::Download => "download",
        }
    }
}

impl fmt::Display for DeliveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Element kind used by the native-tag viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeTagKind {
    Object,
    Embed,
}

impl NativeTagKind {
    pub fn tag_name(&self) -> &'static str {
        match self {
            NativeTagKind::Object => "object",
            NativeTagKind::Embed => "embed",
        }
    }
}

/// Why the active strategy gave up.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureSignal {
    /// Error reported by the inline renderer.
    RenderError(String),
    /// Error event from the native tag element.
    ElementError(String),
    /// No outcome within the watchdog window.
    WatchdogTimeout(Duration),
    /// The strategy could not start at all (no browser, network error).
    Unavailable(String),
}

impl fmt::Display for FailureSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureSignal::RenderError(msg) => write!(f, "render error: {}", msg),
            FailureSignal::ElementError(msg) => write!(f, "element error: {}", msg),
            FailureSignal::WatchdogTimeout(after) => {
                write!(f, "no response after {}s", after.as_secs())
            }
            FailureSignal::Unavailable(msg) => write!(f, "unavailable: {}", msg),
        }
    }
}
