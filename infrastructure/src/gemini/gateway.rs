//! HTTP adapter implementing `ChatGateway` against the Gemini API

use async_trait::async_trait;
use gemcat_application::{ChatGateway, GatewayError};
use gemcat_domain::util::preview;
use gemcat_domain::{GenerationParams, Message, Model, ModelReply};
use tracing::{debug, warn};

use super::protocol::{GenerateContentRequest, GenerateContentResponse};

/// Endpoint prefix of the public service
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gateway for the `generateContent` endpoint
///
/// The API key travels in the `x-goog-api-key` header rather than the URL,
/// keeping credentials out of request logs.
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: String,
    model: Model,
    params: GenerationParams,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: Model::default(),
            params: GenerationParams::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Override the endpoint prefix, mainly for proxies and tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Map a decoded body onto the port's reply contract.
    ///
    /// An empty candidate list is a valid reply, not an error; a candidate
    /// that exists but carries no text is a shape we cannot use.
    fn reply_from(response: GenerateContentResponse) -> Result<ModelReply, GatewayError> {
        if response.candidates.is_empty() {
            return Ok(ModelReply::Empty);
        }
        match response.first_candidate_text() {
            Some(text) => Ok(ModelReply::Text(text.to_string())),
            None => Err(GatewayError::Unexpected(
                "candidate missing text content".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ChatGateway for GeminiGateway {
    async fn generate(&self, history: &[Message]) -> Result<ModelReply, GatewayError> {
        let body = GenerateContentRequest::from_history(history, &self.params);
        debug!("POST {} with {} part(s)", self.endpoint(), history.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Service answered {}: {}", status, preview(&text, 200));
            return Err(GatewayError::Network(format!("HTTP {status}")));
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            warn!("Undecodable response body ({e}): {}", preview(&text, 200));
            GatewayError::MalformedResponse(e.to_string())
        })?;

        Self::reply_from(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn decoded(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    /// Loopback listener that answers one request with a canned response
    /// and hands back everything it read from the socket.
    async fn spawn_one_shot_service(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request_is_complete(&request) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (base_url, handle)
    }

    /// A request is complete once the headers and the declared body
    /// length have both arrived.
    fn request_is_complete(request: &[u8]) -> bool {
        let Some(headers_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&request[..headers_end]);
        let content_length = headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= headers_end + 4 + content_length
    }

    #[test]
    fn test_reply_from_first_candidate() {
        let response = decoded(json!({
            "candidates": [{"content": {"parts": [{"text": "hi there"}]}}],
        }));
        let reply = GeminiGateway::reply_from(response).unwrap();
        assert_eq!(reply, ModelReply::Text("hi there".to_string()));
    }

    #[test]
    fn test_reply_from_empty_candidates() {
        let reply = GeminiGateway::reply_from(decoded(json!({"candidates": []}))).unwrap();
        assert_eq!(reply, ModelReply::Empty);
    }

    #[test]
    fn test_reply_from_candidate_without_text_is_unexpected() {
        let response = decoded(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        let err = GeminiGateway::reply_from(response).unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected(_)));
        assert_eq!(err.to_string(), "Unexpected error: candidate missing text content");
    }

    #[test]
    fn test_endpoint_includes_model() {
        let gateway = GeminiGateway::new("test-key").with_model(Model::Gemini15Flash);
        assert_eq!(
            gateway.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let gateway = GeminiGateway::new("test-key")
            .with_base_url("http://127.0.0.1:8080/v1beta/");
        assert_eq!(
            gateway.endpoint(),
            "http://127.0.0.1:8080/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_delivers_first_candidate_text() {
        let (base_url, service) = spawn_one_shot_service(
            "200 OK",
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello"}]}}]}"#,
        )
        .await;
        let gateway = GeminiGateway::new("test-key").with_base_url(base_url);

        let reply = gateway.generate(&[Message::new("hi")]).await.unwrap();
        assert_eq!(reply, ModelReply::Text("Hello".to_string()));

        let request = service.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-1.5-pro:generateContent"));
        assert!(request.contains("x-goog-api-key: test-key"));
        assert!(request.contains(r#""text":"hi""#));
    }

    #[tokio::test]
    async fn test_generate_maps_http_failure_to_network() {
        let (base_url, service) = spawn_one_shot_service("500 Internal Server Error", "{}").await;
        let gateway = GeminiGateway::new("test-key").with_base_url(base_url);

        let err = gateway.generate(&[Message::new("hi")]).await.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));
        assert_eq!(err.to_string(), "Network error: HTTP 500 Internal Server Error");
        service.await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_maps_undecodable_body_to_malformed_response() {
        let (base_url, service) = spawn_one_shot_service("200 OK", "not json at all").await;
        let gateway = GeminiGateway::new("test-key").with_base_url(base_url);

        let err = gateway.generate(&[Message::new("hi")]).await.unwrap_err();
        assert_eq!(err.to_string(), "Error decoding API response");
        // The decode detail travels in the variant even though the
        // display string stays fixed
        match err {
            GatewayError::MalformedResponse(detail) => assert!(!detail.is_empty()),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
        service.await.unwrap();
    }
}
