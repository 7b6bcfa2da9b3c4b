use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use pdf_library::{delivery::probe::DiagnosticReport, viewer::SessionReport};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// The frequency at which tick events are emitted.
const TICK_FPS: f64 = 10.0;

/// Representation of all possible events.
#[derive(Debug)]
pub enum Event {
    /// An event that is emitted on a regular schedule.
    Tick,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug)]
pub enum AppEvent {
    // Navigation
    Increment,
    Decrement,
    Select,
    Back,

    // System
    Quit,

    // Documents
    OpenDocument(String),
    DownloadDocument(String),
    OpenExternally(String),
    RetryDocument,
    /// Session id and its report.
    SessionFinished(u64, Box<SessionReport>),
    ActionFinished(String),

    // Viewer settings
    ZoomIn,
    ZoomOut,
    Rotate,

    // Diagnostic
    ToggleDiagnostic,
    RunDiagnostic,
    DiagnosticProgress(DiagnosticReport),
    DiagnosticFinished(DiagnosticReport),
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns a new task to handle events.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone());
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Receives an event from the sender.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }

    /// Sender for background tasks reporting back to the app.
    pub fn app_sender(&self) -> AppEventSender {
        AppEventSender { sender: self.sender.clone() }
    }
}

#[derive(Debug, Clone)]
pub struct AppEventSender {
    sender: mpsc::UnboundedSender<Event>,
}

impl AppEventSender {
    pub fn send(&self, app_event: AppEvent) {
        if let Err(e) = self.sender.send(Event::App(app_event)) {
            tracing::debug!(event = ?e.0, "event loop closed, dropping app event");
        }
    }
}

/// A task that reads crossterm events and emits tick events on a regular schedule.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    /// Constructs a new instance of [`EventTask`].
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    /// Runs the event loop.
    async fn run(self) -> color_eyre::Result<()> {
        let tick_rate = Duration::from_secs_f64(1.0 / TICK_FPS);
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_sender_delivers_to_loop() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let app_sender = AppEventSender { sender };

        app_sender.send(AppEvent::ActionFinished("Saved".to_string()));

        match receiver.try_recv() {
            Ok(Event::App(AppEvent::ActionFinished(message))) => assert_eq!(message, "Saved"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_app_sender_tolerates_closed_loop() {
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        let app_sender = AppEventSender { sender };

        app_sender.send(AppEvent::DiagnosticFinished(DiagnosticReport::new(0)));
    }
}
