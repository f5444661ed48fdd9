//! Rate limit tracking from Shopify response headers.
//!
//! Shopify reports leaky-bucket quota usage on every response via the
//! `X-Shopify-Shop-Api-Call-Limit` header (`<used>/<limit>`), and backoff
//! hints via `Retry-After`. The client records the most recent values as
//! advisory telemetry.

/// A snapshot of the shop's API call quota, taken from the most recent
/// response.
///
/// # Example
///
/// ```rust,ignore
/// let limits = client.rate_limits();
/// println!(
///     "used {}/{} (retry after {}s)",
///     limits.request_count, limits.bucket_size, limits.retry_after_seconds
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RateLimitInfo {
    /// The number of requests consumed from the current bucket.
    pub request_count: u32,
    /// The size of the bucket.
    pub bucket_size: u32,
    /// The `Retry-After` value of the most recent response, in seconds.
    /// Zero when the header was absent or unparseable.
    pub retry_after_seconds: f64,
}

impl RateLimitInfo {
    /// Folds the rate-limit headers of a response into the snapshot.
    ///
    /// The quota counters are only overwritten when the call-limit header
    /// parses as two integers separated by `/`; the retry-after value is
    /// overwritten on every response, defaulting to zero.
    pub(crate) fn update(&mut self, call_limit: Option<&str>, retry_after: Option<&str>) {
        if let Some((request_count, bucket_size)) = call_limit.and_then(parse_call_limit) {
            self.request_count = request_count;
            self.bucket_size = bucket_size;
        }

        self.retry_after_seconds = retry_after
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
    }
}

/// Parses a `<used>/<limit>` call-limit header value.
fn parse_call_limit(value: &str) -> Option<(u32, u32)> {
    let (used, limit) = value.split_once('/')?;
    Some((used.parse().ok()?, limit.parse().ok()?))
}
