/// What the server told us about a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorCause {
    /// JSON serialization of the outbound payload, if one was sent.
    pub payload: Option<String>,
    /// HTTP status code of the response.
    pub status: u16,
    /// The `message` field of the (normalized) response body, if present.
    pub message: Option<String>,
}
