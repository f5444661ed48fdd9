//! Error types for API communication, and the response checker that
//! normalizes Shopify's error payloads into them.
//!
//! Shopify reports failures in several JSON shapes: a single `error` string,
//! an `errors` string, an `errors` array, or an `errors` object mapping field
//! names to messages. [`check_response_error`] flattens all of them into a
//! [`ResponseError`], wrapping rate-limited responses as [`RateLimitError`]
//! and unparseable bodies as [`ResponseDecodingError`].
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get::<OrderRoot, ()>("orders/1.json", None).await {
//!     Ok(root) => println!("order: {:?}", root),
//!     Err(Error::RateLimit(e)) => {
//!         println!("rate limited, retry after {}s", e.retry_after);
//!     }
//!     Err(Error::Response(e)) => {
//!         println!("API error {}: {}", e.status, e);
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A general response error following the layout of Shopify's error
/// payloads: a primary message and/or a list of sub-error messages.
///
/// # String Form
///
/// The display form follows a fixed precedence: a non-empty message is
/// returned verbatim; otherwise the sub-errors are sorted lexicographically
/// and joined with `", "`; otherwise the literal `"Unknown Error"`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ResponseError;
///
/// let error = ResponseError {
///     status: 422,
///     message: String::new(),
///     errors: vec![
///         "not a valid title".to_string(),
///         "not a valid description".to_string(),
///     ],
/// };
///
/// assert_eq!(error.to_string(), "not a valid description, not a valid title");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The primary error message.
    pub message: String,
    /// Individual error messages extracted from the response body.
    pub errors: Vec<String>,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            return f.write_str(&self.message);
        }

        let mut errors = self.errors.clone();
        errors.sort_unstable();
        if errors.is_empty() {
            f.write_str("Unknown Error")
        } else {
            f.write_str(&errors.join(", "))
        }
    }
}

impl std::error::Error for ResponseError {}

/// An error specific to a rate-limited (429) response.
///
/// Embeds the underlying [`ResponseError`] so consumers can handle it the
/// same way as any other response error, and carries the server's
/// `Retry-After` hint truncated to whole seconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitError {
    /// The underlying response error.
    pub response: ResponseError,
    /// Seconds to wait before retrying, from the `Retry-After` header.
    pub retry_after: u64,
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.response.fmt(f)
    }
}

impl std::error::Error for RateLimitError {}

/// An error response whose body could not be parsed as JSON.
///
/// Carries the raw body bytes so callers can inspect what the server
/// actually sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseDecodingError {
    /// The raw response body.
    pub body: Vec<u8>,
    /// The JSON parser's failure description.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
}

impl fmt::Display for ResponseDecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ResponseDecodingError {}

/// Unified error type for all client operations.
///
/// Use pattern matching to handle specific failure classes. Transport
/// errors are never retried by the client; rate-limit and service
/// availability errors are retried within the configured budget.
#[derive(Debug, Error)]
pub enum Error {
    /// A structured error response from the API.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// A rate-limited (429) response, with the server's backoff hint.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// An error response whose body could not be parsed as JSON.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// A transport-level failure (connection, DNS, timeout).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request path could not be resolved into a URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Query options could not be serialized into a query string.
    #[error("invalid query options: {0}")]
    Options(#[from] serde_urlencoded::ser::Error),

    /// A request body could not be encoded, or a response body could not
    /// be decoded, as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The generic shape of a Shopify error body.
#[derive(Debug, Default, Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<ErrorsValue>,
}

/// The `errors` field can be a plain string, an array, or an object keyed
/// by field name. The trailing variant absorbs any other JSON kind, which
/// carries no message content.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorsValue {
    Message(String),
    List(Vec<serde_json::Value>),
    Fields(serde_json::Map<String, serde_json::Value>),
    Other(serde_json::Value),
}

/// Checks a completed response for an API error.
///
/// Returns `Ok(())` for any status in the 2xx range, regardless of body
/// content. Otherwise parses the body into the flattened error shape:
///
/// - an unparseable non-empty body becomes a [`ResponseDecodingError`]
///   (an empty body is not a decode failure, since the platform answers
///   some errors with no body at all);
/// - a 429 status becomes a [`RateLimitError`] with the `Retry-After`
///   header parsed as fractional seconds and truncated;
/// - a 406 status has its message replaced with the HTTP reason phrase;
/// - everything else becomes a plain [`ResponseError`].
pub(crate) fn check_response_error(
    status: u16,
    retry_after: Option<&str>,
    body: &[u8],
) -> Result<(), Error> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let raw: RawErrorBody = if body.is_empty() {
        RawErrorBody::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(raw) => raw,
            Err(err) => {
                return Err(ResponseDecodingError {
                    body: body.to_vec(),
                    message: err.to_string(),
                    status,
                }
                .into());
            }
        }
    };

    let mut error = ResponseError {
        status,
        message: raw.error.unwrap_or_default(),
        errors: Vec::new(),
    };

    match raw.errors {
        None | Some(ErrorsValue::Other(_)) => {}
        Some(ErrorsValue::Message(message)) => error.message = message,
        Some(ErrorsValue::List(values)) => {
            // Array order is preserved in both the list and the message.
            error.errors = values.iter().map(display_value).collect();
            error.message = error.errors.join(", ");
        }
        Some(ErrorsValue::Fields(fields)) => {
            // Flattened to "<field>: <message>" entries. JSON objects are
            // unordered, so which entry seeds the primary message when
            // several fields are present is not part of the contract.
            for (field, value) in &fields {
                match value {
                    serde_json::Value::Array(items) => {
                        for item in items {
                            push_field_error(&mut error, field, &display_value(item));
                        }
                    }
                    serde_json::Value::String(item) => push_field_error(&mut error, field, item),
                    _ => {}
                }
            }
        }
    }

    Err(wrap_status_error(status, retry_after, error))
}

fn push_field_error(error: &mut ResponseError, field: &str, item: &str) {
    let entry = format!("{field}: {item}");
    if error.message.is_empty() {
        error.message.clone_from(&entry);
    }
    error.errors.push(entry);
}

/// Renders a JSON value the way it reads in an error message: strings
/// without their quotes, everything else in its JSON form.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Applies status-specific rewrites to a parsed response error.
fn wrap_status_error(status: u16, retry_after: Option<&str>, mut error: ResponseError) -> Error {
    if status == 429 {
        let seconds = retry_after
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or_default();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let retry_after = seconds.max(0.0) as u64;
        return RateLimitError {
            response: error,
            retry_after,
        }
        .into();
    }

    if status == 406 {
        // 406 responses carry no usable body; report the reason phrase.
        error.message = reqwest::StatusCode::NOT_ACCEPTABLE
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
    }

    error.into()
}
