//! Retry with exponential backoff and jitter for listing-site requests.
//!
//! With the default `max_retries = 0` every request is single-shot. When
//! retries are enabled, only transient failures are retried; anything that
//! would fail the same way again is returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Upper bound on a single backoff sleep.
const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` if `err` is worth retrying after a backoff delay.
///
/// Retriable:
/// - [`ScraperError::RateLimited`]: HTTP 429.
/// - [`ScraperError::Http`] timeouts and connect failures.
/// - [`ScraperError::UnexpectedStatus`] with a 5xx status.
///
/// Everything else (4xx, body decode failures, bad base URL) is permanent.
pub(crate) fn is_retriable(err: &ScraperError) -> bool {
    match err {
        ScraperError::RateLimited { .. } => true,
        ScraperError::Http(e) => e.is_timeout() || e.is_connect(),
        ScraperError::UnexpectedStatus { status, .. } => (500..600).contains(status),
        ScraperError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation`, retrying transient errors up to `max_retries` more times.
///
/// Backoff before retry `n` (1-based) is `backoff_base_ms * 2^(n-1)`, capped
/// at 60 s, scaled by a random factor in `[0.75, 1.25)`. A 429 waits at least
/// its `Retry-After` value.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let delay_ms = backoff_delay_ms(&err, attempt, backoff_base_ms);
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient scraper error, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

/// Delay before retry `attempt` (1-based): exponential backoff with jitter,
/// never shorter than the server's `Retry-After` for a 429.
fn backoff_delay_ms(err: &ScraperError, attempt: u32, backoff_base_ms: u64) -> u64 {
    let computed = backoff_base_ms.saturating_mul(1u64 << attempt.saturating_sub(1).min(10));
    let capped = computed.min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;

    match err {
        ScraperError::RateLimited {
            retry_after_secs, ..
        } => jittered.max(retry_after_secs.saturating_mul(1000).min(MAX_DELAY_MS)),
        _ => jittered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn rate_limited() -> ScraperError {
        ScraperError::RateLimited {
            url: "https://tw.trip.com/hotels/list".to_owned(),
            retry_after_secs: 0,
        }
    }

    fn status(status: u16) -> ScraperError {
        ScraperError::UnexpectedStatus {
            status,
            url: "https://tw.trip.com/hotels/list".to_owned(),
        }
    }

    #[test]
    fn server_errors_are_retriable() {
        assert!(is_retriable(&status(502)));
        assert!(is_retriable(&rate_limited()));
    }

    #[test]
    fn client_errors_are_not_retriable() {
        assert!(!is_retriable(&status(404)));
        assert!(!is_retriable(&ScraperError::InvalidBaseUrl {
            base_url: "x".to_owned(),
            reason: "bad".to_owned(),
        }));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, ScraperError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_on_server_error_then_succeeds() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                let n = cc.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(status(503))
                } else {
                    Ok::<u32, ScraperError>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_retries_is_single_shot() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(0, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ScraperError>(rate_limited())
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(ScraperError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn propagates_last_error_after_exhausting_retries() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(2, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ScraperError>(rate_limited())
            }
        })
        .await;
        // max_retries=2 → 3 total attempts
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
        assert!(matches!(result, Err(ScraperError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = Arc::clone(&call_count);
        let result = retry_with_backoff(3, 0, || {
            let cc = Arc::clone(&cc);
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                Err::<u32, ScraperError>(status(404))
            }
        })
        .await;
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result,
            Err(ScraperError::UnexpectedStatus { status: 404, .. })
        ));
    }

    #[test]
    fn rate_limit_delay_honors_retry_after() {
        let err = ScraperError::RateLimited {
            url: "https://tw.trip.com/hotels/list".to_owned(),
            retry_after_secs: 30,
        };
        assert!(backoff_delay_ms(&err, 1, 0) >= 30_000);
        assert!(backoff_delay_ms(&err, 1, 1_000) >= 30_000);
    }

    #[test]
    fn retry_after_floor_is_capped() {
        let err = ScraperError::RateLimited {
            url: "https://tw.trip.com/hotels/list".to_owned(),
            retry_after_secs: 3_600,
        };
        assert_eq!(backoff_delay_ms(&err, 1, 0), MAX_DELAY_MS);
    }

    #[test]
    fn server_error_delay_uses_jittered_backoff() {
        let delay = backoff_delay_ms(&status(503), 2, 1_000);
        assert!((1_500..2_500).contains(&delay), "delay was {delay}");
        assert_eq!(backoff_delay_ms(&status(503), 1, 0), 0);
    }
}
