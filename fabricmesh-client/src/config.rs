//! Client configuration types and builders.

use std::time::Duration;

use url::Url;

/// Default REST API version sent with every request.
const DEFAULT_API_VERSION: &str = "6.0";
/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Default connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default initial retry backoff.
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);
/// Default maximum retry backoff.
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(30);
/// Default retry multiplier.
const DEFAULT_RETRY_MULTIPLIER: f64 = 2.0;
/// Default maximum retry attempts.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration error returned when validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Retry configuration for failed requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    initial_backoff: Duration,
    max_backoff: Duration,
    multiplier: f64,
    max_retries: u32,
}

impl RetryConfig {
    /// Returns the initial backoff duration.
    pub fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }

    /// Returns the maximum backoff duration.
    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Returns the backoff multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the maximum number of retry attempts.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the backoff to apply before the given zero-based retry
    /// attempt, capped at the configured maximum.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.powi(attempt as i32);
        let backoff = self.initial_backoff.mul_f64(factor);
        backoff.min(self.max_backoff)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
            multiplier: DEFAULT_RETRY_MULTIPLIER,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Builder for `RetryConfig`.
#[derive(Debug, Clone, Default)]
pub struct RetryConfigBuilder {
    initial_backoff: Option<Duration>,
    max_backoff: Option<Duration>,
    multiplier: Option<f64>,
    max_retries: Option<u32>,
}

impl RetryConfigBuilder {
    /// Creates a new retry configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial backoff duration.
    pub fn initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = Some(backoff);
        self
    }

    /// Sets the maximum backoff duration.
    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.max_backoff = Some(backoff);
        self
    }

    /// Sets the backoff multiplier.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Sets the maximum number of retry attempts.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Builds the retry configuration, returning an error if validation fails.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `initial_backoff` exceeds `max_backoff`
    /// - `multiplier` is less than 1.0
    pub fn build(self) -> Result<RetryConfig, ConfigError> {
        let initial_backoff = self.initial_backoff.unwrap_or(DEFAULT_INITIAL_BACKOFF);
        let max_backoff = self.max_backoff.unwrap_or(DEFAULT_MAX_BACKOFF);
        let multiplier = self.multiplier.unwrap_or(DEFAULT_RETRY_MULTIPLIER);
        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);

        if initial_backoff > max_backoff {
            return Err(ConfigError::new(
                "initial_backoff must not exceed max_backoff",
            ));
        }

        if multiplier < 1.0 {
            return Err(ConfigError::new("multiplier must be at least 1.0"));
        }

        Ok(RetryConfig {
            initial_backoff,
            max_backoff,
            multiplier,
            max_retries,
        })
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoints: Vec<Url>,
    api_version: String,
    request_timeout: Duration,
    connect_timeout: Duration,
    retry: RetryConfig,
}

impl ClientConfig {
    /// Creates a builder for the client configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the cluster gateway endpoints.
    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }

    /// Returns the API version sent with every request.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the retry configuration.
    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }
}

/// Builder for `ClientConfig`.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    endpoints: Vec<Url>,
    api_version: Option<String>,
    request_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: RetryConfigBuilder,
}

impl ClientConfigBuilder {
    /// Creates a new client configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cluster gateway endpoint.
    pub fn add_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Sets the cluster gateway endpoints, replacing any previously
    /// configured.
    pub fn endpoints(mut self, endpoints: impl IntoIterator<Item = Url>) -> Self {
        self.endpoints = endpoints.into_iter().collect();
        self
    }

    /// Sets the API version sent with every request.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Configures retry settings using a builder function.
    pub fn retry<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RetryConfigBuilder) -> RetryConfigBuilder,
    {
        self.retry = f(self.retry);
        self
    }

    /// Builds the client configuration, returning an error if validation
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no endpoint is configured or the retry
    /// settings are invalid.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::new("at least one endpoint is required"));
        }

        let retry = self.retry.build()?;

        Ok(ClientConfig {
            endpoints: self.endpoints,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("http://localhost:19080").unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = ClientConfig::builder()
            .add_endpoint(endpoint())
            .build()
            .unwrap();
        assert_eq!(config.api_version(), "6.0");
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.retry().max_retries(), 3);
    }

    #[test]
    fn test_no_endpoint_is_rejected() {
        let err = ClientConfig::builder().build().unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn test_retry_validation() {
        let err = ClientConfig::builder()
            .add_endpoint(endpoint())
            .retry(|r| {
                r.initial_backoff(Duration::from_secs(60))
                    .max_backoff(Duration::from_secs(1))
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("initial_backoff"));

        let err = ClientConfig::builder()
            .add_endpoint(endpoint())
            .retry(|r| r.multiplier(0.5))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("multiplier"));
    }

    #[test]
    fn test_backoff_growth_is_capped() {
        let retry = RetryConfigBuilder::new()
            .initial_backoff(Duration::from_millis(100))
            .max_backoff(Duration::from_millis(250))
            .multiplier(2.0)
            .build()
            .unwrap();
        assert_eq!(retry.backoff_for(0), Duration::from_millis(100));
        assert_eq!(retry.backoff_for(1), Duration::from_millis(200));
        assert_eq!(retry.backoff_for(2), Duration::from_millis(250));
    }
}
