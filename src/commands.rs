use std::sync::Arc;

use color_eyre::eyre::eyre;
use pdf_library::{
    delivery::{
        absolute_url,
        probe::{run_diagnostic, HttpProber},
        strategy::{DeliveryStrategy, Environment, FailureSignal, NativeTagKind},
        DeliveryLog, TracingLog,
    },
    viewer::{BrowserPresenter, PresentRequest, Presenter, SessionOutcome, ViewSettings, ViewerSession},
    Catalog, Category, LibraryConfig,
};

fn presenter(config: &LibraryConfig) -> color_eyre::Result<BrowserPresenter> {
    Ok(BrowserPresenter::new(
        config.viewer_dir.clone(),
        config.download_dir.clone(),
        config.download_timeout(),
    )?)
}

pub fn list(config: &LibraryConfig, catalog: &Catalog) -> color_eyre::Result<()> {
    println!("{} documents available ({})", catalog.len(), config.host);

    for category in Category::display_order() {
        let docs = catalog.by_category(category);
        if docs.is_empty() {
            continue;
        }
        println!();
        println!("{} ({} documents)", category.section_title(), docs.len());
        println!("  {}", category.section_subtitle());
        for doc in docs {
            println!("  - {:<50} {}", doc.title, catalog.url_for_filename(&doc.filename));
        }
    }
    Ok(())
}

pub async fn view(
    config: &LibraryConfig,
    catalog: &Catalog,
    filename: &str,
    probe_first: bool,
) -> color_eyre::Result<()> {
    let presenter = presenter(config)?;
    let prober = HttpProber::new(config.probe_timeout())?;
    let environment = Environment::detect(config);
    let environment = {
        let headless = environment.headless || !presenter.can_launch_external();
        environment.with_headless(headless)
    };

    let record = catalog.record_for_navigation(filename);
    let log: Arc<dyn DeliveryLog> = Arc::new(TracingLog);
    let session = ViewerSession::new(record, config.host.clone(), environment, log)
        .with_watchdog(config.watchdog())
        .with_probe_first(probe_first);

    let report = session.run(&presenter, &prober).await;

    for error in &report.errors {
        eprintln!("! {}", error);
    }

    match report.outcome {
        SessionOutcome::Delivered(strategy) => {
            println!("Opened \"{}\" with the {}", report.title, strategy);
            Ok(())
        }
        SessionOutcome::Unreachable | SessionOutcome::Exhausted => {
            println!("Could not open \"{}\" automatically.", report.title);
            for action in report.recovery_actions() {
                println!("  {}: {}", action.label(), report.absolute_url);
            }
            Err(eyre!("{} was not delivered", report.location.url))
        }
    }
}

pub async fn redirect(config: &LibraryConfig, catalog: &Catalog, filename: &str) -> color_eyre::Result<()> {
    let url = absolute_url(&config.host, &catalog.url_for_filename(filename));
    println!("Redirecting to {}", url);

    let presenter = presenter(config)?;
    let settings = ViewSettings::default();
    let request = PresentRequest {
        strategy: DeliveryStrategy::NewTab,
        native_tag: NativeTagKind::Object,
        url: &url,
        title: catalog.title_for_filename(filename),
        settings: &settings,
    };

    let result = match tokio::time::timeout(config.watchdog(), presenter.present(&request)).await {
        Ok(result) => result,
        Err(_) => Err(FailureSignal::WatchdogTimeout(config.watchdog())),
    };

    if let Err(signal) = result {
        tracing::warn!(%url, %signal, "redirect failed");
        println!("If the redirect did not work, open this link: {}", url);
    }
    Ok(())
}

pub async fn download(config: &LibraryConfig, catalog: &Catalog, filename: &str) -> color_eyre::Result<()> {
    let url = absolute_url(&config.host, &catalog.url_for_filename(filename));
    let presenter = presenter(config)?;

    match presenter.download(&url, catalog.title_for_filename(filename)).await {
        Ok(path) => {
            println!("Saved {}", path.display());
            Ok(())
        }
        Err(e) => {
            println!("Download failed: {}", e);
            println!("Open externally: {}", url);
            Err(e.into())
        }
    }
}

pub async fn diagnose(config: &LibraryConfig, catalog: &Catalog, json: bool) -> color_eyre::Result<()> {
    let prober = HttpProber::new(config.probe_timeout())?;
    let total = catalog.len();
    if !json {
        println!("Checking {} documents on {}", total, config.host);
    }

    let report = run_diagnostic(
        catalog,
        &config.host,
        &prober,
        config.probe_delay(),
        &TracingLog,
        |report| {
            if json {
                return;
            }
            if let Some(entry) = report.entries.last() {
                let mark = if entry.outcome.reachable { "ok " } else { "ERR" };
                println!(
                    "[{:>2}/{}] {} {:<60} {}",
                    report.entries.len(),
                    total,
                    mark,
                    entry.path,
                    entry.outcome.status_label()
                );
            }
        },
    )
    .await;

    if json {
        let output = serde_json::json!({
            "host": config.host,
            "reachable": report.success_count(),
            "unreachable": report.error_count(),
            "recommendations": report.recommendations(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "Reachable: {}  Errors: {}  Total: {}",
        report.success_count(),
        report.error_count(),
        report.total
    );
    for tip in report.recommendations() {
        println!("  * {}", tip);
    }
    Ok(())
}
