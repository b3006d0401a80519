use crate::clock::Clock;
use crate::domain::{UpstreamRequest, UpstreamResponse, UpstreamResult};
use crate::ports::UpstreamTransport;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Bounded exponential backoff for GET requests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_backoff: Duration,
    /// Upper bound for any single wait, including `Retry-After`
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

    pub fn is_retryable_status(&self, status: u16) -> bool {
        Self::RETRYABLE_STATUSES.contains(&status)
    }

    /// Wait before retry number `retry` (0-based): 0.5s, 1s, 2s, 4s, 8s with the defaults
    pub fn backoff(&self, retry: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(1u32 << retry.min(20))
            .min(self.max_backoff)
    }

    fn delay_for(&self, retry: u32, response: Option<&UpstreamResponse>) -> Duration {
        let retry_after = response
            .filter(|r| matches!(r.status, 429 | 503))
            .and_then(|r| r.retry_after);

        match retry_after {
            Some(delay) => delay.min(self.max_backoff),
            None => self.backoff(retry),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(120),
        }
    }
}

/// Decorator that retries transient failures of the wrapped transport.
/// The result it finally returns is never retried again by callers.
pub struct RetryingTransport {
    inner: Arc<dyn UpstreamTransport>,
    clock: Arc<dyn Clock>,
    policy: RetryPolicy,
}

impl RetryingTransport {
    pub fn new(inner: Arc<dyn UpstreamTransport>, clock: Arc<dyn Clock>) -> Self {
        Self::with_policy(inner, clock, RetryPolicy::default())
    }

    pub fn with_policy(
        inner: Arc<dyn UpstreamTransport>,
        clock: Arc<dyn Clock>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            inner,
            clock,
            policy,
        }
    }

    fn is_transient(&self, result: &UpstreamResult) -> bool {
        match result {
            Ok(response) => self.policy.is_retryable_status(response.status),
            Err(_) => true,
        }
    }
}

#[async_trait]
impl UpstreamTransport for RetryingTransport {
    async fn fetch(&self, request: &UpstreamRequest) -> UpstreamResult {
        let mut retry = 0;

        loop {
            let result = self.inner.fetch(request).await;

            if !self.is_transient(&result) {
                if retry > 0 {
                    debug!("GET {} succeeded after {} retries", request.url, retry);
                }
                return result;
            }

            let outcome = match &result {
                Ok(response) => format!("status {}", response.status),
                Err(err) => err.to_string(),
            };

            if retry >= self.policy.max_retries {
                error!(
                    "GET {} failed after {} attempts: {}",
                    request.url,
                    retry + 1,
                    outcome
                );
                return result;
            }

            let delay = self.policy.delay_for(retry, result.as_ref().ok());
            warn!(
                "GET {} attempt {} failed ({}), retrying in {}ms",
                request.url,
                retry + 1,
                outcome,
                delay.as_millis()
            );

            self.clock.sleep(delay).await;
            retry += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::domain::{TransportError, UpstreamKind};
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Replays scripted results; the last one repeats once the script runs out
    struct ScriptedTransport {
        script: Mutex<VecDeque<UpstreamResult>>,
        last: Mutex<Option<UpstreamResult>>,
        calls: Mutex<usize>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<UpstreamResult>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                last: Mutex::new(None),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock()
        }
    }

    #[async_trait]
    impl UpstreamTransport for ScriptedTransport {
        async fn fetch(&self, _request: &UpstreamRequest) -> UpstreamResult {
            *self.calls.lock() += 1;
            let next = self.script.lock().pop_front();
            match next {
                Some(result) => {
                    *self.last.lock() = Some(result.clone());
                    result
                }
                None => self
                    .last
                    .lock()
                    .clone()
                    .unwrap_or_else(|| Err(TransportError::Other("empty script".to_string()))),
            }
        }
    }

    fn request() -> UpstreamRequest {
        UpstreamRequest::get(UpstreamKind::Riot, "https://br.api.riotgames.com/val/status/v1/platform-data")
    }

    fn setup(script: Vec<UpstreamResult>) -> (Arc<ScriptedTransport>, Arc<ManualClock>, RetryingTransport) {
        let inner = Arc::new(ScriptedTransport::new(script));
        let clock = Arc::new(ManualClock::new());
        let transport = RetryingTransport::new(inner.clone(), clock.clone());
        (inner, clock, transport)
    }

    #[test]
    fn test_backoff_sequence() {
        let policy = RetryPolicy::default();
        let delays: Vec<Duration> = (0..5).map(|retry| policy.backoff(retry)).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(500),
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
            ]
        );
    }

    #[tokio::test]
    async fn test_first_success_does_not_sleep() {
        let (inner, clock, transport) = setup(vec![Ok(UpstreamResponse::new(200, "{}"))]);

        let response = transport.fetch(&request()).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(inner.calls(), 1);
        assert!(clock.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_persistent_503_runs_full_backoff_then_surfaces() {
        let (inner, clock, transport) = setup(vec![Ok(UpstreamResponse::new(503, "down"))]);

        let response = transport.fetch(&request()).await.unwrap();

        assert_eq!(response.status, 503);
        assert_eq!(response.text(), "down");
        assert_eq!(inner.calls(), 6);
        assert_eq!(
            clock.sleeps(),
            vec![
                Duration::from_millis(500),
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
            ]
        );
        assert_eq!(clock.elapsed(), Duration::from_millis(15_500));
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let (inner, clock, transport) = setup(vec![
            Err(TransportError::Connect("connection refused".to_string())),
            Ok(UpstreamResponse::new(502, "bad gateway")),
            Ok(UpstreamResponse::new(200, "{\"ok\":true}")),
        ]);

        let response = transport.fetch(&request()).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(inner.calls(), 3);
        assert_eq!(
            clock.sleeps(),
            vec![Duration::from_millis(500), Duration::from_secs(1)]
        );
    }

    #[tokio::test]
    async fn test_non_retryable_status_returns_immediately() {
        for status in [400, 401, 403, 404] {
            let (inner, clock, transport) = setup(vec![Ok(UpstreamResponse::new(status, "nope"))]);

            let response = transport.fetch(&request()).await.unwrap();

            assert_eq!(response.status, status);
            assert_eq!(inner.calls(), 1);
            assert!(clock.sleeps().is_empty());
        }
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_after_exhaustion() {
        let (inner, clock, transport) = setup(vec![Err(TransportError::Timeout(Duration::from_secs(10)))]);

        let result = transport.fetch(&request()).await;

        assert_eq!(result, Err(TransportError::Timeout(Duration::from_secs(10))));
        assert_eq!(inner.calls(), 6);
        assert_eq!(clock.sleeps().len(), 5);
    }

    #[tokio::test]
    async fn test_retry_after_header_overrides_backoff() {
        let (_inner, clock, transport) = setup(vec![
            Ok(UpstreamResponse::new(429, "slow down").with_retry_after(Duration::from_secs(3))),
            Ok(UpstreamResponse::new(500, "oops").with_retry_after(Duration::from_secs(30))),
            Ok(UpstreamResponse::new(503, "busy").with_retry_after(Duration::from_secs(600))),
            Ok(UpstreamResponse::new(200, "[]")),
        ]);

        transport.fetch(&request()).await.unwrap();

        // 500 ignores Retry-After; 600s is capped at 120s
        assert_eq!(
            clock.sleeps(),
            vec![
                Duration::from_secs(3),
                Duration::from_secs(1),
                Duration::from_secs(120),
            ]
        );
    }
}
