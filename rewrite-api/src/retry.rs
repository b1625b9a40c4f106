//! Retry policy: which statuses are transient and how long to wait.

use std::time::Duration;

use rand::Rng;

use rewrite_core::constants::{
    RETRYABLE_STATUSES, RETRY_BASE_DELAY, RETRY_JITTER_RATIO, RETRY_MAX_DELAY,
};

/// Whether a failed response with this status may be retried.
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Exponential part of the backoff: `300ms * 2^attempt`, capped at 10s.
pub fn capped_delay(attempt: u32) -> Duration {
    let max = RETRY_MAX_DELAY.as_nanos();
    let exp = 1u128
        .checked_shl(attempt)
        .and_then(|factor| RETRY_BASE_DELAY.as_nanos().checked_mul(factor))
        .unwrap_or(max);
    Duration::from_nanos(exp.min(max) as u64)
}

/// Backoff delay before retry number `attempt` (0-based).
///
/// The capped exponential delay plus up to 30% random jitter, so the result
/// lies in `[capped, 1.3 * capped]` and never exceeds 13s.
pub fn backoff(attempt: u32) -> Duration {
    let capped = capped_delay(attempt);
    let jitter = rand::thread_rng().gen_range(0.0..=RETRY_JITTER_RATIO);
    let nanos = (capped.as_nanos() as f64 * (1.0 + jitter)).floor();
    Duration::from_nanos(nanos as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        for status in [408, 425, 429, 500, 502, 503, 504] {
            assert!(is_retryable_status(status), "{status} should be retryable");
        }
    }

    #[test]
    fn test_other_statuses_are_terminal() {
        for status in (100..600).filter(|s| !RETRYABLE_STATUSES.contains(s)) {
            assert!(!is_retryable_status(status), "{status} should not be retryable");
        }
    }

    #[test]
    fn test_capped_delay_progression() {
        assert_eq!(capped_delay(0), Duration::from_millis(300));
        assert_eq!(capped_delay(1), Duration::from_millis(600));
        assert_eq!(capped_delay(2), Duration::from_millis(1200));
        assert_eq!(capped_delay(6), Duration::from_secs(10));
        assert_eq!(capped_delay(u32::MAX), Duration::from_secs(10));
    }

    #[test]
    fn test_capped_delay_is_monotonic() {
        let mut previous = Duration::ZERO;
        for attempt in 0..80 {
            let current = capped_delay(attempt);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_backoff_within_jitter_bounds() {
        for attempt in 0..40 {
            let capped = capped_delay(attempt);
            for _ in 0..20 {
                let delay = backoff(attempt);
                assert!(delay >= capped, "attempt {attempt}: {delay:?} < {capped:?}");
                assert!(delay <= capped.mul_f64(1.3) + Duration::from_nanos(1));
                assert!(delay <= Duration::from_secs(13));
            }
        }
    }
}
