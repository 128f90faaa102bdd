//! Generic HTTP fetching with bounded retries and error classification

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::constants::retry::MAX_DELAY_SECONDS;
use crate::error::AppError;

/// Bounded exponential backoff for transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per request, the first one included
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled for each one after
    pub base_delay: Duration,
    /// Upper bound for any single delay, including server-provided Retry-After
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay: Duration::from_secs(MAX_DELAY_SECONDS),
        }
    }

    /// Delay to wait after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(
            crate::constants::retry::MAX_ATTEMPTS,
            Duration::from_millis(crate::constants::retry::BASE_DELAY_MS),
        )
    }
}

/// GETs `url` and decodes the JSON body into `T`.
///
/// Timeouts, connection failures (DNS included), 429 and 5xx responses are
/// retried up to `policy.max_attempts` times with exponential backoff; a
/// numeric Retry-After header replaces the computed delay, capped at
/// `policy.max_delay`. Whatever is still failing after that becomes a network
/// error. Non-retryable statuses and unusable bodies become data errors.
#[instrument(skip(client, policy))]
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    policy: &RetryPolicy,
) -> Result<T, AppError> {
    debug!("GET {url}");

    let mut attempt = 1u32;
    let response = loop {
        let can_retry = attempt < policy.max_attempts;
        match client.get(url).send().await {
            Ok(resp) if can_retry && is_transient_status(resp.status()) => {
                let wait = retry_after(&resp)
                    .unwrap_or_else(|| policy.delay_after(attempt))
                    .min(policy.max_delay);
                warn!(
                    "{url} answered {}; attempt {attempt}/{} failed, waiting {wait:?}",
                    resp.status(),
                    policy.max_attempts
                );
                tokio::time::sleep(wait).await;
            }
            Ok(resp) => break resp,
            Err(e) if can_retry && (e.is_timeout() || e.is_connect()) => {
                let wait = policy.delay_after(attempt);
                warn!(
                    "{url} unreachable ({e}); attempt {attempt}/{} failed, waiting {wait:?}",
                    policy.max_attempts
                );
                tokio::time::sleep(wait).await;
            }
            Err(e) => {
                error!("Giving up on {url} after {attempt} attempt(s): {e}");
                return Err(if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                });
            }
        }
        attempt += 1;
    };

    let status = response.status();
    if !status.is_success() {
        error!("{url} answered {status} after {attempt} attempt(s)");
        return Err(status_error(status, url));
    }

    let body = response.text().await?;
    debug!("{url} returned {} bytes", body.len());
    decode_body(&body, url)
}

fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Server-requested delay in whole seconds, if any
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

fn status_error(status: StatusCode, url: &str) -> AppError {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown status");
    match code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(code, reason, url),
        502 | 503 => AppError::api_service_unavailable(code, reason, url),
        _ => AppError::api_server_error(code, reason, url),
    }
}

/// Tells an empty body and non-JSON apart from JSON of the wrong shape.
fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        let trimmed = body.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("empty response body", url)
        } else if !trimmed.starts_with(['{', '[']) {
            let preview: String = trimmed.chars().take(80).collect();
            AppError::api_malformed_json(format!("body starts with {preview:?}"), url)
        } else {
            error!("{url} returned JSON of an unexpected shape: {e}");
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i32,
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::ZERO)
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::new(5, Duration::from_millis(500));
        assert_eq!(policy.delay_after(1), Duration::from_millis(500));
        assert_eq!(policy.delay_after(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_after(40), policy.max_delay);
    }

    #[test]
    fn test_policy_needs_at_least_one_attempt() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/ok", server.uri());
        let payload: Payload = fetch(&client, &url, &fast_policy()).await.unwrap();
        assert_eq!(payload, Payload { value: 7 });
    }

    #[tokio::test]
    async fn test_fetch_retries_transient_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .with_priority(1)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 1}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/flaky", server.uri());
        let payload: Payload = fetch(&client, &url, &fast_policy()).await.unwrap();
        assert_eq!(payload.value, 1);
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_max_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/down", server.uri());
        let result = fetch::<Payload>(&client, &url, &fast_policy()).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_honors_retry_after_on_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/limited"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/limited"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 2}"#))
            .expect(1)
            .mount(&server)
            .await;

        // A base delay this long would stall the test if Retry-After were ignored
        let policy = RetryPolicy::new(2, Duration::from_secs(3600));
        let client = create_test_http_client();
        let url = format!("{}/limited", server.uri());
        let payload: Payload = fetch(&client, &url, &policy).await.unwrap();
        assert_eq!(payload.value, 2);
    }

    #[test]
    fn test_status_error_mapping() {
        let url = "https://api.nhle.com/stats/rest/en/skater/summary";
        assert!(matches!(status_error(StatusCode::NOT_FOUND, url), AppError::ApiNotFound { .. }));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, url),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, url),
            AppError::ApiClientError { status: 403, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            AppError::ApiServiceUnavailable { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::GATEWAY_TIMEOUT, url),
            AppError::ApiServerError { status: 504, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_does_not_retry_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/missing", server.uri());
        let result = fetch::<Payload>(&client, &url, &fast_policy()).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_classifies_bad_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/shape"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"other": true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let policy = fast_policy();

        let html = fetch::<Payload>(&client, &format!("{}/html", server.uri()), &policy).await;
        assert!(matches!(html, Err(AppError::ApiMalformedJson { .. })));

        let empty = fetch::<Payload>(&client, &format!("{}/empty", server.uri()), &policy).await;
        assert!(matches!(empty, Err(AppError::ApiNoData { .. })));

        let shape = fetch::<Payload>(&client, &format!("{}/shape", server.uri()), &policy).await;
        assert!(matches!(shape, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_network_error() {
        // Nothing listens on port 9 on the loopback interface
        let client = create_test_http_client();
        let result = fetch::<Payload>(&client, "http://127.0.0.1:9/seasons", &fast_policy()).await;
        let err = result.unwrap_err();
        assert!(err.is_network(), "expected network error, got {err:?}");
        assert!(err.user_message().contains("127.0.0.1"));
    }
}
