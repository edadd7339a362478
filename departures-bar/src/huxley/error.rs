//! Huxley client error types.

/// Errors from fetching a departure board.
///
/// None of these are recoverable within a run: the caller reports them and
/// exits with a failure status.
#[derive(Debug, thiserror::Error)]
pub enum HuxleyError {
    /// HTTP request failed (network error, timeout, etc.)
    ///
    /// The URL is stripped: it carries the access token in its query.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Access token rejected
    #[error("unauthorized: check HUXLEY_ACCESS_TOKEN")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by Huxley")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}

impl From<reqwest::Error> for HuxleyError {
    fn from(err: reqwest::Error) -> Self {
        HuxleyError::Http(err.without_url())
    }
}

impl HuxleyError {
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        HuxleyError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HuxleyError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = HuxleyError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check HUXLEY_ACCESS_TOKEN");

        let err = HuxleyError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }

    #[test]
    fn json_error_keeps_truncated_body() {
        let body = "x".repeat(1000);
        let parse_err = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        let err = HuxleyError::json(parse_err, &body);

        match &err {
            HuxleyError::Json { body: Some(b), .. } => assert_eq!(b.len(), 500),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("(body: xxx"));
    }
}
