use std::time::{Duration, Instant};

use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};

/// What one GET of the status page produced. `success` is the HTTP-level
/// outcome; `status_line` carries either the response status or the
/// transport error, verbatim, for the report.
#[derive(Debug)]
pub struct FetchOutcome {
    pub success: bool,
    pub status_line: String,
    pub body: String,
    pub elapsed: Duration,
}

pub struct StatusClient {
    client: Client,
    url: Url,
}

impl StatusClient {
    pub fn new(hostname: &str, port: u16, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        let url = Url::parse(&format!("http://{hostname}:{port}/server-status"))
            .map_err(|e| Error::Config(format!("bad hostname {hostname:?}: {e}")))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Single GET, no retries. A failed fetch is an outcome, not an error;
    /// the caller decides the verdict.
    pub async fn fetch(&self) -> FetchOutcome {
        log::info!("Probing {}", self.url);
        let start = Instant::now();

        let response = match self.client.get(self.url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Request failed: {e}");
                return FetchOutcome {
                    success: false,
                    status_line: e.to_string(),
                    body: String::new(),
                    elapsed: start.elapsed(),
                };
            }
        };

        let status_line = format!("{:?} {}", response.version(), response.status());
        let success = response.status().is_success();

        match response.text().await {
            Ok(body) => {
                log::debug!("Body length: {} bytes", body.len());
                FetchOutcome {
                    success,
                    status_line,
                    body,
                    elapsed: start.elapsed(),
                }
            }
            Err(e) => {
                log::warn!("Reading body failed: {e}");
                FetchOutcome {
                    success: false,
                    status_line: e.to_string(),
                    body: String::new(),
                    elapsed: start.elapsed(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StatusClient;
    use std::time::Duration;

    #[test]
    fn builds_the_status_url() {
        let client =
            StatusClient::new("web01", 8080, Duration::from_secs(10), "probe/0.1").unwrap();
        assert_eq!(client.url().as_str(), "http://web01:8080/server-status");
    }

    #[test]
    fn rejects_a_malformed_hostname() {
        assert!(StatusClient::new("not a host", 80, Duration::from_secs(1), "probe").is_err());
    }
}
