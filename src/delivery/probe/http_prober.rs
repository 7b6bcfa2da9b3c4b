use std::time::Duration;

use crate::error::Result;

use super::{ProbeOutcome, Prober};

/// Issues `HEAD` requests with a short timeout.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::from_status(url, response.status().as_u16()),
            Err(e) => {
                tracing::debug!(%url, error = %e, "probe failed without response");
                ProbeOutcome::no_response(url)
            }
        }
    }
}
