use crate::delivery::strategy::{DeliveryStrategy, FailureSignal};
use crate::viewer::{PresentRequest, Presenter};

use super::BrowserPresenter;

impl Presenter for BrowserPresenter {
    async fn present(&self, request: &PresentRequest<'_>) -> Result<(), FailureSignal> {
        match request.strategy {
            DeliveryStrategy::Inline => {
                let html = self.create_inline_html(request.url, request.title, request.settings);
                let page = self.viewer_dir.join("inline.html");
                tokio::fs::write(&page, html)
                    .await
                    .map_err(|e| FailureSignal::RenderError(e.to_string()))?;
                self.launch_browser(&format!("file://{}", page.display()))
                    .await
                    .map(|_| ())
                    .map_err(FailureSignal::RenderError)
            }

            DeliveryStrategy::NativeTag => {
                let html = self.create_native_html(request.url, request.title, request.native_tag);
                let page = self
                    .viewer_dir
                    .join(format!("native-{}.html", request.native_tag.tag_name()));
                tokio::fs::write(&page, html)
                    .await
                    .map_err(|e| FailureSignal::ElementError(e.to_string()))?;
                self.launch_browser(&format!("file://{}", page.display()))
                    .await
                    .map(|_| ())
                    .map_err(FailureSignal::ElementError)
            }

            DeliveryStrategy::NewTab => self.open_in_new_tab(request.url).await,

            DeliveryStrategy::Download => match self.download(request.url, request.title).await {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "saved document");
                    Ok(())
                }
                Err(e) => Err(FailureSignal::Unavailable(e.to_string())),
            },
        }
    }

    /// The desktop opener gives no failure callback beyond its exit status,
    /// which may never come.
    fn reports_failure(&self, strategy: DeliveryStrategy) -> bool {
        strategy != DeliveryStrategy::NewTab
    }
}
