//! Retry policy: attempt budget and exponential backoff.
//!
//! [`RetryPolicy`] controls how [`GenerateQuestionsUseCase`](crate::use_cases::generate_questions::GenerateQuestionsUseCase)
//! retries the generation model. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Attempt budget and backoff for generation calls.
///
/// The delay before attempt `n` (1-based) is zero for the first attempt and
/// `base_delay * 2^(n-2)` afterwards: 1s, 2s, 4s, ... with the default base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one. Always >= 1.
    pub max_attempts: usize,
    /// Delay before the second attempt; doubles for each later attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max.max(1);
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    // ==================== Backoff ====================

    /// Delay to wait before the given 1-based attempt.
    pub fn delay_before(&self, attempt: usize) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let exponent = u32::try_from(attempt - 2).unwrap_or(u32::MAX).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }
}
