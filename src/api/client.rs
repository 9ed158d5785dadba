//! HTTP API Client
//!
//! One-shot retrieval of the three dashboard resources. Transient failures
//! are retried with capped exponential back-off before being reported.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use crate::config::DashboardConfig;
use crate::error::{FetchError, FetchResult};
use crate::state::dataset::TimeSeriesDataset;
use crate::state::metadata::{MetadataDocument, PropertySet};

/// Time-series dataset resource
pub const DATA_RESOURCE: &str = "get_data";
/// Options document resource (variables plus `INFO`/`APM`)
pub const OPTIONS_RESOURCE: &str = "get_options";
/// Model document resource
pub const MODEL_RESOURCE: &str = "get_model";

/// Whether a failed attempt number `attempt` (zero based) should be retried
pub fn should_retry(err: &FetchError, attempt: u32, max_retries: u32) -> bool {
    err.is_retryable() && attempt < max_retries
}

/// Fetch and decode the time-series dataset
pub async fn fetch_dataset(config: &DashboardConfig) -> FetchResult<TimeSeriesDataset> {
    let body = get_with_retry(config, DATA_RESOURCE).await?;
    TimeSeriesDataset::from_json(body)
}

/// Fetch the options document and partition it
pub async fn fetch_options(config: &DashboardConfig) -> FetchResult<MetadataDocument> {
    let body = get_with_retry(config, OPTIONS_RESOURCE).await?;
    MetadataDocument::from_json(body)
}

/// Fetch the model document
pub async fn fetch_model(config: &DashboardConfig) -> FetchResult<PropertySet> {
    let body = get_with_retry(config, MODEL_RESOURCE).await?;
    PropertySet::from_json(body)
}

async fn get_with_retry(config: &DashboardConfig, resource: &str) -> FetchResult<Value> {
    let mut attempt = 0;
    loop {
        match get_json(config, resource).await {
            Ok(body) => return Ok(body),
            Err(err) if should_retry(&err, attempt, config.fetch_retries) => {
                let delay = config.retry_delay_ms(attempt);
                log::warn!(
                    "{} failed ({}); retry {}/{} in {}ms",
                    resource,
                    err,
                    attempt + 1,
                    config.fetch_retries,
                    delay
                );
                TimeoutFuture::new(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn get_json(config: &DashboardConfig, resource: &str) -> FetchResult<Value> {
    let url = config.resource_url(resource);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Parse(format!("{}: {}", resource, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays the retry loop's decisions for a fixed sequence of failures
    fn attempts_for(errors: &[FetchError], config: &DashboardConfig) -> (usize, Vec<u32>) {
        let mut delays = Vec::new();
        let mut attempt = 0;
        for err in errors {
            if !should_retry(err, attempt, config.fetch_retries) {
                break;
            }
            delays.push(config.retry_delay_ms(attempt));
            attempt += 1;
        }
        (delays.len() + 1, delays)
    }

    #[test]
    fn test_retries_are_bounded() {
        let config = DashboardConfig::default();
        let errors = vec![FetchError::Network("down".to_string()); 10];
        let (requests, delays) = attempts_for(&errors, &config);
        assert_eq!(requests, 3);
        assert_eq!(delays, vec![500, 1000]);
    }

    #[test]
    fn test_client_errors_are_not_retried() {
        let config = DashboardConfig::default();
        let errors = vec![FetchError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        }];
        let (requests, delays) = attempts_for(&errors, &config);
        assert_eq!(requests, 1);
        assert!(delays.is_empty());
    }

    #[test]
    fn test_retry_stops_on_permanent_error() {
        let config = DashboardConfig {
            fetch_retries: 5,
            ..DashboardConfig::default()
        };
        let errors = vec![
            FetchError::Status { status: 503, status_text: String::new() },
            FetchError::Parse("truncated".to_string()),
            FetchError::Network("down".to_string()),
        ];
        let (requests, _) = attempts_for(&errors, &config);
        assert_eq!(requests, 2);
    }

    #[test]
    fn test_zero_retries() {
        let config = DashboardConfig {
            fetch_retries: 0,
            ..DashboardConfig::default()
        };
        assert!(!should_retry(&FetchError::Network("x".to_string()), 0, config.fetch_retries));
    }

    #[test]
    fn test_resource_urls() {
        let config = DashboardConfig {
            api_base: "http://10.0.0.5:8050".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.resource_url(DATA_RESOURCE), "http://10.0.0.5:8050/get_data");
        assert_eq!(config.resource_url(OPTIONS_RESOURCE), "http://10.0.0.5:8050/get_options");
        assert_eq!(config.resource_url(MODEL_RESOURCE), "http://10.0.0.5:8050/get_model");
    }
}
