use std::process::Stdio;

use tokio::process::Command as AsyncCommand;

use super::BrowserPresenter;

impl BrowserPresenter {
    /// Open `target` (a `file://` page or an http URL) in the first browser found.
    pub(super) async fn launch_browser(&self, target: &str) -> Result<&'static str, String> {
        let browsers = [
            "firefox",
            "chromium-browser",
            "chromium",
            "google-chrome",
            "epiphany",
            "midori",
            "open", // macOS default opener
        ];

        for browser in browsers {
            if !self.command_exists(browser).await {
                continue;
            }

            let mut cmd = AsyncCommand::new(browser);
            match browser {
                "chromium-browser" | "chromium" | "google-chrome" => {
                    cmd.arg("--new-window");
                }
                _ => {}
            }
            cmd.arg(target);
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());

            match cmd.spawn() {
                Ok(_) => {
                    tracing::debug!(%browser, %target, "launched browser");
                    return Ok(browser);
                }
                Err(e) => {
                    tracing::debug!(%browser, error = %e, "browser failed to start");
                }
            }
        }

        Err("no suitable browser found. Install one of: firefox, chromium, epiphany".to_string())
    }
}
