//! One-shot HTTP execution against the remote API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use crate::config::ClientConfig;

use super::body::{RequestBody, UploadPart};
use super::outcome::{ApiFailure, RequestOutcome};
use super::transport::Transport;

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Stable string form for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One request against the remote API. `path` is relative to the
/// configured base URL and may carry a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: HttpMethod,
    pub body: Option<RequestBody>,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            token: None,
        }
    }

    pub fn json(mut self, payload: Value) -> Self {
        self.body = Some(RequestBody::Json(payload));
        self
    }

    pub fn multipart(mut self, parts: Vec<UploadPart>) -> Self {
        self.body = Some(RequestBody::Multipart(parts));
        self
    }

    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// Executes exactly one network call per [`execute`] invocation.
///
/// Failures of any origin — transport, content negotiation, remote
/// error status — are folded into the returned [`RequestOutcome`].
/// The executor never consults or mutates session state; reacting to
/// `Unauthorized` is the caller layer's decision.
///
/// [`execute`]: HttpExecutor::execute
pub struct HttpExecutor {
    client: Client,
    base_url: String,
}

impl HttpExecutor {
    /// Build the executor from deployment configuration. The underlying
    /// client is constructed once and reused for every call.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Perform the call and normalize the result.
    pub async fn execute(&self, request: ApiRequest) -> RequestOutcome {
        let request_id = uuid::Uuid::new_v4();
        let url = format!("{}{}", self.base_url, request.path);

        tracing::debug!(
            request_id = %request_id,
            method = request.method.as_str(),
            path = %request.path,
            "Executing API request"
        );

        let mut builder = self.client.request(request.method.as_reqwest(), &url);

        if let Some(token) = &request.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        builder = match request.body {
            Some(RequestBody::Json(payload)) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload.to_string()),
            Some(RequestBody::Multipart(parts)) => builder.multipart(build_form(parts)),
            None => builder,
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(source) => {
                tracing::warn!(request_id = %request_id, error = %source, "Network failure");
                return RequestOutcome::Failure(ApiFailure::unreachable());
            }
        };

        let status = response.status().as_u16();
        let declared_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|content_type| content_type.contains("application/json"))
            .unwrap_or(false);

        let text = match response.text().await {
            Ok(text) => text,
            Err(source) => {
                tracing::warn!(request_id = %request_id, error = %source, "Response body lost");
                return RequestOutcome::Failure(ApiFailure::unreachable());
            }
        };

        // Some servers mislabel JSON responses; a parse attempt on the
        // raw text is the fallback for undeclared content types.
        let parsed: Option<Value> = serde_json::from_str(&text).ok();

        if (200..300).contains(&status) {
            return match parsed {
                Some(payload) => RequestOutcome::Success { payload },
                None if text.trim().is_empty() => RequestOutcome::Success {
                    payload: Value::Null,
                },
                None if declared_json => RequestOutcome::Failure(ApiFailure::parse(text)),
                None => RequestOutcome::Success {
                    payload: Value::String(text),
                },
            };
        }

        let failure = ApiFailure::from_response(status, parsed.as_ref(), &text);
        tracing::debug!(
            request_id = %request_id,
            status,
            kind = failure.kind.as_str(),
            "API request failed"
        );
        RequestOutcome::Failure(failure)
    }
}

#[async_trait]
impl Transport for HttpExecutor {
    async fn send(&self, request: ApiRequest) -> RequestOutcome {
        self.execute(request).await
    }
}

fn build_form(parts: Vec<UploadPart>) -> Form {
    let mut form = Form::new();
    for part in parts {
        let piece = Part::bytes(part.bytes.clone()).file_name(part.file_name.clone());
        match piece.mime_str(&part.mime_type) {
            Ok(piece) => form = form.part(part.field, piece),
            Err(source) => {
                tracing::warn!(
                    mime_type = %part.mime_type,
                    error = %source,
                    "Invalid mime type on upload part, sending without one"
                );
                form = form.part(part.field, Part::bytes(part.bytes).file_name(part.file_name));
            }
        }
    }
    form
}
