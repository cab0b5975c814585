// Blocking HTTP client for JSON documents
use crate::error::{Result, TrackerError};
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .user_agent(user_agent)
            .build();
        Self { agent }
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(TrackerError::Status {
                    url: url.to_string(),
                    status,
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(TrackerError::Http {
                    url: url.to_string(),
                    message: transport.to_string(),
                })
            }
        };

        let body = response.into_string().map_err(|e| TrackerError::Http {
            url: url.to_string(),
            message: format!("Failed to read response: {}", e),
        })?;

        serde_json::from_str(&body).map_err(|e| TrackerError::json(url, e))
    }
}
