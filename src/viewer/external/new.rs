use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

use super::BrowserPresenter;

impl BrowserPresenter {
    /// `download_timeout` bounds each download, so a host that never answers
    /// turns into a failed strategy instead of a stuck session.
    pub fn new(viewer_dir: PathBuf, download_dir: PathBuf, download_timeout: Duration) -> Result<Self> {
        std::fs::create_dir_all(&viewer_dir)?;

        let client = reqwest::Client::builder().timeout(download_timeout).build()?;

        Ok(Self {
            viewer_dir,
            download_dir,
            client,
        })
    }
}
