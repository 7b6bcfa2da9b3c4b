use std::process::Stdio;

use super::BrowserPresenter;

impl BrowserPresenter {
    /// Check if any known browser or opener is installed (synchronous)
    pub fn can_launch_external(&self) -> bool {
        let commands = ["xdg-open", "open", "firefox", "chromium-browser", "google-chrome", "epiphany"];

        commands.iter().any(|command| {
            std::process::Command::new("which")
                .arg(command)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|status| status.success())
                .unwrap_or(false)
        })
    }
}
