use crate::config::Config;
use crate::error::{ConfigError, SummaryError};
use crate::models::{TransactionSummary, parse_summary};
use log::{debug, info};
use reqwest::header::HeaderValue;
use reqwest::{Client as HttpClient, Response, StatusCode};

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    config: Config,
    auth_value: Option<HeaderValue>,
}

impl Client {
    /// Create a client for the configured summary endpoint.
    pub fn new(config: Config) -> Result<Self, SummaryError> {
        let auth_value = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(|key| {
                let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                    .map_err(|_| ConfigError::InvalidApiKey)?;
                value.set_sensitive(true);
                Ok::<_, ConfigError>(value)
            })
            .transpose()?;

        let http = HttpClient::builder().timeout(config.timeout).build()?;

        info!(
            "Initialized summary client for {} (timeout {:?}, {})",
            config.service_url,
            config.timeout,
            if auth_value.is_some() {
                "authenticated"
            } else {
                "unauthenticated"
            }
        );
        Ok(Self {
            http,
            config,
            auth_value,
        })
    }

    /// Fetch and decode the transaction summary. Invalid UTF-8 in the body is
    /// replaced lossily before decoding.
    pub async fn fetch_summary(&self) -> Result<TransactionSummary, SummaryError> {
        let response = self.get().await?;
        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        parse_summary(&body)
    }

    async fn get(&self) -> Result<Response, SummaryError> {
        let mut request = self.http.get(self.config.service_url.clone());
        if let Some(value) = &self.auth_value {
            request = request.header(self.config.auth_header.clone(), value.clone());
        }
        debug!("GET request to {}", self.config.service_url);
        let response = request.send().await?;
        debug!("Received status {}", response.status());
        self.handle_status(response.status())?;
        Ok(response)
    }

    fn handle_status(&self, status: StatusCode) -> Result<(), SummaryError> {
        if status.is_success() {
            return Ok(());
        }
        Err(SummaryError::Status { status })
    }
}
