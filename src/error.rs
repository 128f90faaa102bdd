use thiserror::Error;

/// Every way a run can fail.
///
/// Fetch failures split into two families: network errors (the host could not
/// be reached or kept failing after retries) and data errors (the host answered
/// with something that cannot be used). Both abort the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("NHL API request failed: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // HTTP status failures
    #[error("NHL API resource not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("NHL API server failure ({status}): {message} [{url}]")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("NHL API rejected the request ({status}): {message} [{url}]")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("NHL API rate limited the request (429): {message} [{url}]")]
    ApiRateLimit { message: String, url: String },

    #[error("NHL API temporarily unavailable ({status}): {message} [{url}]")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Transport failures
    #[error("Timed out waiting for {url}")]
    NetworkTimeout { url: String },

    #[error("Could not connect to {url}: {message}")]
    NetworkConnection { url: String, message: String },

    // Unusable payloads
    #[error("NHL API sent a body that is not JSON: {message} [{url}]")]
    ApiMalformedJson { message: String, url: String },

    #[error("NHL API response has an unexpected shape: {message} [{url}]")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("NHL API response carries no data: {message} [{url}]")]
    ApiNoData { message: String, url: String },

    #[error("Invalid season id: {value}")]
    InvalidSeasonId { value: String },

    #[error("File access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is not valid TOML: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    DateTimeParse(String),

    #[error("Could not set up logging: {0}")]
    LogSetup(String),
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// 5xx other than 502 and 503
    pub fn api_server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// 4xx other than 404 and 429
    pub fn api_client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// 502 and 503
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Valid JSON that does not match the expected record, e.g. a missing required field
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn invalid_season_id(value: impl Into<String>) -> Self {
        Self::InvalidSeasonId {
            value: value.into(),
        }
    }

    /// Failures worth another attempt: timeouts, refused connections, 5xx and 429.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkTimeout { .. }
                | Self::NetworkConnection { .. }
                | Self::ApiServerError { .. }
                | Self::ApiServiceUnavailable { .. }
                | Self::ApiRateLimit { .. }
        )
    }

    /// The host could not be reached or kept failing.
    /// Everything retryable counts, plus transport errors that escaped the retry loop.
    pub fn is_network(&self) -> bool {
        self.is_retryable() || matches!(self, Self::ApiFetch(_))
    }

    /// The API answered with something we cannot use. Never retried.
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            Self::ApiNotFound { .. }
                | Self::ApiClientError { .. }
                | Self::ApiMalformedJson { .. }
                | Self::ApiUnexpectedStructure { .. }
                | Self::ApiNoData { .. }
                | Self::InvalidSeasonId { .. }
                | Self::DateTimeParse(_)
        )
    }

    /// URL of the request that failed, when the error carries one
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::ApiFetch(e) => e.url().map(|u| u.as_str()),
            Self::ApiNotFound { url }
            | Self::NetworkTimeout { url }
            | Self::ApiServerError { url, .. }
            | Self::ApiClientError { url, .. }
            | Self::ApiRateLimit { url, .. }
            | Self::ApiServiceUnavailable { url, .. }
            | Self::NetworkConnection { url, .. }
            | Self::ApiMalformedJson { url, .. }
            | Self::ApiUnexpectedStructure { url, .. }
            | Self::ApiNoData { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Host name of the request that failed, when it can be determined
    pub fn host(&self) -> Option<String> {
        self.url()
            .and_then(|url| reqwest::Url::parse(url).ok())
            .and_then(|url| url.host_str().map(str::to_string))
    }

    /// Message shown to the user when the run aborts.
    /// Network failures name the unreachable host and point at connectivity and DNS.
    pub fn user_message(&self) -> String {
        if self.is_network() {
            let host = self.host().unwrap_or_else(|| "the NHL stats API".to_string());
            format!(
                "{self}\nNetwork error while reaching {host}. \
                 Check your internet connection or DNS settings and try again."
            )
        } else {
            self.to_string()
        }
    }
}
