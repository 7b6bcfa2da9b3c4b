mod can_launch_external;
mod command_exists;
mod create_viewer_html;
mod download;
mod launch_browser;
mod new;
mod open_in_new_tab;
mod present;

use std::path::PathBuf;

/// Presents documents through the system browser and local downloads.
#[derive(Debug, Clone)]
pub struct BrowserPresenter {
    viewer_dir: PathBuf,
    download_dir: PathBuf,
    client: reqwest::Client,
}
