use std::sync::Arc;

use color_eyre::Result;
use pdf_library::{
    delivery::{
        probe::{DiagnosticReport, HttpProber},
        strategy::Environment,
        DeliveryLog, TracingLog,
    },
    viewer::{BrowserPresenter, SessionReport, ViewSettings},
    Catalog, DocumentRecord, LibraryConfig,
};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};

use crate::event::{AppEvent, Event, EventHandler};

mod catalog_view;
mod tasks;

pub use catalog_view::{CatalogView, Row};
use tasks::TaskContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Overview,
    Viewer,
    Diagnostic,
}

/// The document currently open on the viewer page.
#[derive(Debug)]
pub struct ViewerPage {
    pub record: DocumentRecord,
    pub url: String,
    /// Tags the session so a stale report from an earlier attempt is dropped.
    pub session: u64,
    /// `None` while the session is still running.
    pub report: Option<SessionReport>,
}

impl ViewerPage {
    /// URL the finished session located, when it is about `filename`.
    pub fn located_url(&self, filename: &str) -> Option<&str> {
        if self.record.filename != filename {
            return None;
        }
        self.report.as_ref().map(|report| report.absolute_url.as_str())
    }
}

/// URL and title for a manual download or external open. Prefers the
/// location found by the open document's session over the canonical path.
fn action_target(
    host: &str,
    catalog: &Catalog,
    viewer: Option<&ViewerPage>,
    filename: &str,
) -> (String, String) {
    let url = viewer
        .and_then(|page| page.located_url(filename))
        .map(str::to_string)
        .unwrap_or_else(|| {
            pdf_library::delivery::absolute_url(host, &catalog.url_for_filename(filename))
        });
    (url, catalog.title_for_filename(filename).to_string())
}

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current app mode/screen
    pub mode: AppMode,
    pub config: LibraryConfig,
    pub catalog: Catalog,
    pub catalog_view: CatalogView,
    pub settings: ViewSettings,
    pub viewer: Option<ViewerPage>,
    pub diagnostic: Option<DiagnosticReport>,
    pub diagnostic_running: bool,
    /// Last message from a background action.
    pub status: Option<String>,
    sessions_started: u64,
    /// Event handler.
    pub events: EventHandler,
    tasks: TaskContext,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(config: LibraryConfig, catalog: Catalog) -> Result<Self> {
        let presenter = BrowserPresenter::new(
            config.viewer_dir.clone(),
            config.download_dir.clone(),
            config.download_timeout(),
        )?;
        let prober = HttpProber::new(config.probe_timeout())?;

        let environment = Environment::detect(&config);
        let headless = environment.headless || !presenter.can_launch_external();
        let environment = environment.with_headless(headless);
        if let Some(reason) = environment.restriction() {
            tracing::info!(%reason, "inline viewing disabled");
        }

        let events = EventHandler::new();
        let log: Arc<dyn DeliveryLog> = Arc::new(TracingLog);
        let tasks = TaskContext {
            host: config.host.clone(),
            environment,
            watchdog: config.watchdog(),
            probe_first: config.probe_before_view,
            probe_delay: config.probe_delay(),
            presenter: Arc::new(presenter),
            prober: Arc::new(prober),
            log,
            sender: events.app_sender(),
        };

        Ok(Self {
            running: true,
            mode: AppMode::Overview,
            config,
            catalog,
            catalog_view: CatalogView::new(),
            settings: ViewSettings::default(),
            viewer: None,
            diagnostic: None,
            diagnostic_running: false,
            status: None,
            sessions_started: 0,
            events,
            tasks,
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.tasks.environment
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {}
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_events(key_event)?;
                    }
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Increment => self.catalog_view.next(&self.catalog),
            AppEvent::Decrement => self.catalog_view.prev(&self.catalog),
            AppEvent::Select => self.select(),
            AppEvent::Back => self.back_to_overview(),
            AppEvent::Quit => self.quit(),

            AppEvent::OpenDocument(filename) => self.open_document(&filename),
            AppEvent::RetryDocument => {
                if let Some(page) = &self.viewer {
                    let filename = page.record.filename.clone();
                    self.open_document(&filename);
                }
            }
            AppEvent::SessionFinished(session, report) => {
                if let Some(page) = &mut self.viewer {
                    if page.session == session {
                        page.report = Some(*report);
                    }
                }
            }
            AppEvent::DownloadDocument(filename) => {
                let (url, title) = self.url_and_title(&filename);
                self.status = Some(format!("Downloading {}...", title));
                self.tasks.spawn_download(url, title);
            }
            AppEvent::OpenExternally(filename) => {
                let (url, title) = self.url_and_title(&filename);
                self.status = Some(format!("Opening {}...", url));
                self.tasks.spawn_open_externally(url, title);
            }
            AppEvent::ActionFinished(message) => self.status = Some(message),

            AppEvent::ZoomIn => {
                self.settings.zoom_in();
                self.status = Some(format!("Zoom {}%", self.settings.zoom_percent()));
            }
            AppEvent::ZoomOut => {
                self.settings.zoom_out();
                self.status = Some(format!("Zoom {}%", self.settings.zoom_percent()));
            }
            AppEvent::Rotate => {
                self.settings.rotate();
                self.status = Some(format!("Rotation {}°", self.settings.rotation));
            }

            AppEvent::ToggleDiagnostic => {
                self.mode = match self.mode {
                    AppMode::Diagnostic => AppMode::Overview,
                    _ => AppMode::Diagnostic,
                };
            }
            AppEvent::RunDiagnostic => self.start_diagnostic(),
            AppEvent::DiagnosticProgress(report) => self.diagnostic = Some(report),
            AppEvent::DiagnosticFinished(report) => {
                self.diagnostic = Some(report);
                self.diagnostic_running = false;
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if let KeyCode::Char('c' | 'C') = key_event.code {
            if key_event.modifiers == KeyModifiers::CONTROL {
                self.events.send(AppEvent::Quit);
                return Ok(());
            }
        }

        match self.mode {
            AppMode::Overview => match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::Decrement),
                KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::Increment),
                KeyCode::Enter | KeyCode::Char(' ') => self.events.send(AppEvent::Select),
                KeyCode::Char('d') => {
                    if let Some(filename) = self.selected_filename() {
                        self.events.send(AppEvent::DownloadDocument(filename));
                    }
                }
                KeyCode::Char('o') => {
                    if let Some(filename) = self.selected_filename() {
                        self.events.send(AppEvent::OpenExternally(filename));
                    }
                }
                KeyCode::Char('p') => self.events.send(AppEvent::ToggleDiagnostic),
                KeyCode::Char('+') | KeyCode::Char('=') => self.events.send(AppEvent::ZoomIn),
                KeyCode::Char('-') => self.events.send(AppEvent::ZoomOut),
                KeyCode::Char('R') => self.events.send(AppEvent::Rotate),
                _ => {}
            },
            AppMode::Viewer => {
                let filename = self.viewer.as_ref().map(|page| page.record.filename.clone());
                match key_event.code {
                    KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                    KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                        self.events.send(AppEvent::Back)
                    }
                    KeyCode::Char('r') => self.events.send(AppEvent::RetryDocument),
                    KeyCode::Char('d') => {
                        if let Some(filename) = filename {
                            self.events.send(AppEvent::DownloadDocument(filename));
                        }
                    }
                    KeyCode::Char('o') => {
                        if let Some(filename) = filename {
                            self.events.send(AppEvent::OpenExternally(filename));
                        }
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => self.events.send(AppEvent::ZoomIn),
                    KeyCode::Char('-') => self.events.send(AppEvent::ZoomOut),
                    KeyCode::Char('R') => self.events.send(AppEvent::Rotate),
                    _ => {}
                }
            }
            AppMode::Diagnostic => match key_event.code {
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('p') => {
                    self.events.send(AppEvent::ToggleDiagnostic)
                }
                KeyCode::Enter | KeyCode::Char('r') => self.events.send(AppEvent::RunDiagnostic),
                _ => {}
            },
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn back_to_overview(&mut self) {
        self.mode = AppMode::Overview;
        self.viewer = None;
    }

    fn select(&mut self) {
        match self.catalog_view.selected_row(&self.catalog) {
            Some(Row::Section(category)) => self.catalog_view.toggle(category, &self.catalog),
            Some(Row::Document(i)) => {
                if let Some(doc) = self.catalog.records().get(i) {
                    let filename = doc.filename.clone();
                    self.events.send(AppEvent::OpenDocument(filename));
                }
            }
            None => {}
        }
    }

    fn selected_filename(&self) -> Option<String> {
        match self.catalog_view.selected_row(&self.catalog)? {
            Row::Document(i) => self.catalog.records().get(i).map(|doc| doc.filename.clone()),
            Row::Section(_) => None,
        }
    }

    fn url_and_title(&self, filename: &str) -> (String, String) {
        action_target(&self.config.host, &self.catalog, self.viewer.as_ref(), filename)
    }

    /// Opening always starts a fresh session.
    fn open_document(&mut self, filename: &str) {
        let record = self.catalog.record_for_navigation(filename);
        let (url, _) = self.url_and_title(filename);
        tracing::info!(filename, %url, "opening document");

        self.sessions_started += 1;
        let session = self.sessions_started;
        self.tasks.spawn_session(session, record.clone(), self.settings);
        self.viewer = Some(ViewerPage { record, url, session, report: None });
        self.mode = AppMode::Viewer;
        self.status = None;
    }

    fn start_diagnostic(&mut self) {
        if self.diagnostic_running {
            return;
        }
        self.diagnostic_running = true;
        self.diagnostic = Some(DiagnosticReport::new(self.catalog.len()));
        self.tasks.spawn_diagnostic(self.catalog.clone());
    }
}
