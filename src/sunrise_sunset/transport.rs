use std::{future::Future, time::Duration};

use crate::error::AppError;

/// Capability to issue a plain GET request and return the response body
pub trait HttpGet {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, AppError>> + Send;
}

/// `HttpGet` backed by a reqwest client with no extra headers
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport whose requests fail once `timeout` elapses.
    /// The default transport never times out.
    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ReqwestTransport { client })
    }
}

impl HttpGet for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, AppError> {
        // status is not inspected, error bodies go through the decoder like any other
        let response = self.client.get(url).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
