use async_trait::async_trait;
use radiant::domain::{
    TransportError, UpstreamKind, UpstreamRequest, UpstreamResponse, UpstreamResult,
};
use radiant::ports::UpstreamTransport;
use reqwest::Client;
use reqwest::header::{HeaderValue, RETRY_AFTER, USER_AGENT};
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport. Performs exactly one attempt per call;
/// retries belong to `RetryingTransport`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    riot_token: HeaderValue,
}

impl HttpTransport {
    pub const TOKEN_HEADER: &str = "X-Riot-Token";
    pub const CLIENT_USER_AGENT: &str = "ValorantTracker/1.0 (+backend)";

    pub fn new(riot_api_key: &str) -> shared::Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| shared::Error::Config(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(client, riot_api_key)
    }

    pub fn with_client(client: Client, riot_api_key: &str) -> shared::Result<Self> {
        let mut riot_token = HeaderValue::from_str(riot_api_key)
            .map_err(|_| shared::Error::Config("RIOT_API_KEY is not a valid header value".to_string()))?;
        riot_token.set_sensitive(true);

        Ok(Self { client, riot_token })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn fetch(&self, request: &UpstreamRequest) -> UpstreamResult {
        let mut builder = self
            .client
            .get(&request.url)
            .query(&request.query)
            .timeout(request.timeout);

        if request.kind == UpstreamKind::Riot {
            builder = builder
                .header(Self::TOKEN_HEADER, self.riot_token.clone())
                .header(USER_AGENT, Self::CLIENT_USER_AGENT);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response
            .bytes()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        debug!("GET {} -> {} ({} bytes)", request.url, status, body.len());

        Ok(UpstreamResponse {
            status,
            body,
            retry_after,
        })
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

impl Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("riot_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::{HeaderMap, StatusCode, header},
        response::IntoResponse,
        routing::get,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn echo_headers(
        headers: HeaderMap,
        axum::extract::Query(query): axum::extract::Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
        Json(json!({
            "token": header("x-riot-token"),
            "userAgent": header("user-agent"),
            "query": query,
        }))
    }

    async fn unavailable() -> impl IntoResponse {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, "7")],
            "maintenance",
        )
    }

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_millis(500)).await;
        "late"
    }

    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route("/echo", get(echo_headers))
            .route("/unavailable", get(unavailable))
            .route("/slow", get(slow));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn body_json(response: &UpstreamResponse) -> Value {
        serde_json::from_slice(&response.body).unwrap()
    }

    #[tokio::test]
    async fn test_riot_requests_carry_credentials() {
        let base = spawn_upstream().await;
        let transport = HttpTransport::new("RGAPI-secret").unwrap();

        let request = UpstreamRequest::get(UpstreamKind::Riot, format!("{base}/echo"))
            .query("locale", "pt-BR");
        let response = transport.fetch(&request).await.unwrap();

        assert_eq!(response.status, 200);
        let body = body_json(&response);
        assert_eq!(body["token"], "RGAPI-secret");
        assert_eq!(body["userAgent"], HttpTransport::CLIENT_USER_AGENT);
        assert_eq!(body["query"]["locale"], "pt-BR");
    }

    #[tokio::test]
    async fn test_cosmetic_requests_carry_no_credentials() {
        let base = spawn_upstream().await;
        let transport = HttpTransport::new("RGAPI-secret").unwrap();

        let request = UpstreamRequest::get(UpstreamKind::Cosmetic, format!("{base}/echo"))
            .query("language", "en-US");
        let response = transport.fetch(&request).await.unwrap();

        let body = body_json(&response);
        assert_eq!(body["token"], Value::Null);
        assert_ne!(body["userAgent"], HttpTransport::CLIENT_USER_AGENT);
        assert_eq!(body["query"]["language"], "en-US");
    }

    #[tokio::test]
    async fn test_non_success_is_returned_not_raised() {
        let base = spawn_upstream().await;
        let transport = HttpTransport::new("key").unwrap();

        let request = UpstreamRequest::get(UpstreamKind::Riot, format!("{base}/unavailable"));
        let response = transport.fetch(&request).await.unwrap();

        assert_eq!(response.status, 503);
        assert_eq!(response.text(), "maintenance");
        assert_eq!(response.retry_after, Some(Duration::from_secs(7)));
    }

    #[tokio::test]
    async fn test_timeout_is_per_request() {
        let base = spawn_upstream().await;
        let transport = HttpTransport::new("key").unwrap();

        let mut request = UpstreamRequest::get(UpstreamKind::Cosmetic, format!("{base}/slow"));
        request.timeout = Duration::from_millis(50);
        let result = transport.fetch(&request).await;

        assert_eq!(result, Err(TransportError::Timeout(Duration::from_millis(50))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new("key").unwrap();
        let request = UpstreamRequest::get(UpstreamKind::Cosmetic, format!("http://{addr}/v1/weapons"));
        let result = transport.fetch(&request).await;

        assert!(matches!(result, Err(TransportError::Connect(_))));
    }

    #[test]
    fn test_invalid_token_is_a_config_error() {
        let result = HttpTransport::new("bad\nkey");
        assert!(matches!(result, Err(shared::Error::Config(_))));
    }
}
