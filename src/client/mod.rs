//! Client layer: builds authenticated requests, sends them, and interprets responses.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{ApiErrorCause, ApiRequest, Credentials, Method, ValidationError};

const DEFAULT_BASE_URL: &str = "https://api.sendblue.co";
const CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Enumerated kind of a [`SendblueError`].
pub enum ErrorKind {
    /// The server answered with a non-2xx status.
    ApiRequestFailed,
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    Transport,
    /// The response body was not valid JSON.
    MalformedResponse,
    /// The normalized body did not deserialize into the requested type.
    Decode,
    /// The outbound payload could not be serialized.
    Serialize,
    /// A constructor rejected its input.
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ApiRequestFailed => "API request failed",
            Self::Transport => "transport failure",
            Self::MalformedResponse => "malformed response body",
            Self::Decode => "unexpected response shape",
            Self::Serialize => "payload serialization failed",
            Self::Validation => "invalid input",
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SendblueClient`].
///
/// Every error belongs to a single call; nothing is retried.
pub enum SendblueError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("API request failed: {method} {path} returned HTTP {status}", status = .cause.status)]
    Api {
        method: Method,
        path: String,
        cause: ApiErrorCause,
    },

    /// Response body is not JSON. `body` is `None` when it was blank.
    #[error("malformed response body (HTTP {status})")]
    MalformedResponse {
        status: u16,
        body: Option<String>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The normalized response does not match the caller's type.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The caller's payload could not be turned into JSON.
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SendblueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::ApiRequestFailed,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Serialize(_) => ErrorKind::Serialize,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Payload, status and server message of a failed API call.
    pub fn api_cause(&self) -> Option<&ApiErrorCause> {
        match self {
            Self::Api { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { cause, .. } => Some(cause.status),
            Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SendblueClient`].
///
/// Use this when you need to point at another origin or set a timeout or user-agent.
pub struct SendblueClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendblueClientBuilder {
    /// Create a builder with the default origin and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API origin (`https://api.sendblue.co`). A trailing `/` is dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendblueClient`].
    pub fn build(self) -> Result<SendblueClient, SendblueError> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendblueError::Transport(Box::new(err)))?;

        Ok(SendblueClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let trimmed = input.trim().trim_end_matches('/');
    let url = url::Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone)]
/// High-level Sendblue client.
///
/// Every call is `METHOD {origin}{path}` with the `sb-api-key-id`, `sb-api-secret-key`
/// and `Content-Type: application/json` headers. Response bodies come back with their
/// object keys rewritten to camelCase (see [`crate::normalize_keys`]).
///
/// The client is cheap to clone and can issue any number of calls concurrently.
pub struct SendblueClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SendblueClient {
    /// Create a client against `https://api.sendblue.co`.
    ///
    /// For more customization, use [`SendblueClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SendblueClientBuilder {
        SendblueClientBuilder::new(credentials)
    }

    /// Perform one authenticated call and return the normalized response body.
    ///
    /// Errors:
    /// - [`SendblueError::Transport`] when no response was received,
    /// - [`SendblueError::MalformedResponse`] when the body is not JSON (any status),
    /// - [`SendblueError::Api`] for non-2xx responses, carrying the serialized payload,
    ///   the status and the server's `message`.
    pub async fn call(&self, request: ApiRequest) -> Result<Value, SendblueError> {
        let method = request.method();
        let url = format!("{}{}", self.base_url, request.path());
        let payload =
            crate::transport::encode_payload(request.payload()).map_err(SendblueError::Serialize)?;

        let mut headers = Vec::with_capacity(3);
        headers.extend(self.credentials.headers());
        headers.push((CONTENT_TYPE.0, CONTENT_TYPE.1.to_owned()));

        tracing::debug!(target: "sendblue::http", method = %method, url = %url, has_payload = payload.is_some(), "sending request");

        let response = self
            .http
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body: payload.clone(),
            })
            .await
            .map_err(|err| {
                tracing::debug!(target: "sendblue::http", method = %method, url = %url, err = %err, "request error");
                SendblueError::Transport(err)
            })?;

        let status = response.status;
        tracing::debug!(target: "sendblue::http", method = %method, url = %url, status, "response received");

        let body = match crate::transport::decode_json_response(&response.body) {
            Ok(body) => body,
            Err(err) => {
                return Err(SendblueError::MalformedResponse {
                    status,
                    body: non_blank(response.body),
                    source: Box::new(err),
                });
            }
        };

        if !(200..=299).contains(&status) {
            let cause = ApiErrorCause {
                payload,
                status,
                message: crate::transport::server_message(&body),
            };
            tracing::warn!(target: "sendblue::http", method = %method, path = %request.path(), status, "API request failed");
            return Err(SendblueError::Api {
                method,
                path: request.path().to_owned(),
                cause,
            });
        }

        Ok(body)
    }

    /// [`SendblueClient::call`], then deserialize the normalized body into `T`.
    ///
    /// Field names of `T` should be camelCase on the wire
    /// (`#[serde(rename_all = "camelCase")]`).
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, SendblueError> {
        let body = self.call(request).await?;
        serde_json::from_value(body).map_err(SendblueError::Decode)
    }

    /// `GET {origin}{path}` without a body.
    pub async fn get(&self, path: impl Into<String>) -> Result<Value, SendblueError> {
        self.call(ApiRequest::get(path)).await
    }

    /// `POST {origin}{path}` with `payload` serialized as JSON.
    pub async fn post<P: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        payload: &P,
    ) -> Result<Value, SendblueError> {
        let payload = serde_json::to_value(payload).map_err(SendblueError::Serialize)?;
        self.call(ApiRequest::post(path).with_payload(payload)).await
    }

    /// `DELETE {origin}{path}` without a body.
    pub async fn delete(&self, path: impl Into<String>) -> Result<Value, SendblueError> {
        self.call(ApiRequest::delete(path)).await
    }
}

fn non_blank(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}
