use std::process::Stdio;

use tokio::process::Command as AsyncCommand;

use crate::delivery::strategy::FailureSignal;

use super::BrowserPresenter;

impl BrowserPresenter {
    /// Hand the URL to the desktop opener and wait for its verdict.
    pub(super) async fn open_in_new_tab(&self, url: &str) -> Result<(), FailureSignal> {
        for opener in ["xdg-open", "open"] {
            if !self.command_exists(opener).await {
                continue;
            }

            let status = AsyncCommand::new(opener)
                .arg(url)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await;

            return match status {
                Ok(status) if status.success() => Ok(()),
                Ok(status) => Err(FailureSignal::Unavailable(format!(
                    "{} exited with {}",
                    opener, status
                ))),
                Err(e) => Err(FailureSignal::Unavailable(format!("{}: {}", opener, e))),
            };
        }

        self.launch_browser(url)
            .await
            .map(|_| ())
            .map_err(FailureSignal::Unavailable)
    }
}
