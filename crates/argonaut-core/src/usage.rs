use crate::registry::ModelSpec;
use serde::Serialize;

/// Estimate token count for a piece of text.
///
/// Simple approximation (~4 bytes per token, truncating). This is not a
/// tokenizer and will drift from real counts, especially for non-ASCII
/// text; callers that need exact usage must get it from the provider.
pub fn estimate_tokens(text: &str) -> u64 {
    text.len() as u64 / 4
}

/// Running token and cost counters for one backend instance.
///
/// Counters never decrease. Mutation happens only through
/// [`record_attempt`](UsageTracker::record_attempt) and
/// [`record_success`](UsageTracker::record_success), which the owning
/// adapter calls after each request. Not synchronized internally; a tracker
/// shared across threads must be guarded by the host.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UsageTracker {
    total_input_tokens: u64,
    total_output_tokens: u64,
    total_cost: f64,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call that sent a request but produced no usable reply.
    ///
    /// Failed calls still count their input tokens: the request went over
    /// the wire and the service may have billed for it.
    pub fn record_attempt(&mut self, input_tokens: u64, spec: &ModelSpec) {
        self.total_input_tokens += input_tokens;
        self.total_cost += input_tokens as f64 * spec.cost_per_input_token;
    }

    /// Record a completed call with both sides of the exchange counted.
    pub fn record_success(&mut self, input_tokens: u64, output_tokens: u64, spec: &ModelSpec) {
        self.record_attempt(input_tokens, spec);
        self.total_output_tokens += output_tokens;
        self.total_cost += output_tokens as f64 * spec.cost_per_output_token;
    }

    pub fn total_input_tokens(&self) -> u64 {
        self.total_input_tokens
    }

    pub fn total_output_tokens(&self) -> u64 {
        self.total_output_tokens
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModelFamily;

    fn spec(rate_in: f64, rate_out: f64) -> ModelSpec {
        ModelSpec {
            context_length: 128_000,
            cost_per_input_token: rate_in,
            cost_per_output_token: rate_out,
            family: ModelFamily::Chat,
        }
    }

    #[test]
    fn estimate_truncates() {
        assert_eq!(estimate_tokens(&"x".repeat(17)), 4);
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
    }

    #[test]
    fn estimate_is_monotonic_over_prefixes() {
        let text = "The quick brown fox jumps over the lazy dog";
        let mut prev = 0;
        for end in 0..=text.len() {
            let count = estimate_tokens(&text[..end]);
            assert!(count >= prev);
            prev = count;
        }
    }

    #[test]
    fn counters_accumulate_across_calls() {
        let spec = spec(0.0, 0.0);
        let mut usage = UsageTracker::new();
        usage.record_success(10, 5, &spec);
        usage.record_success(7, 3, &spec);
        assert_eq!(usage.total_input_tokens(), 17);
        assert_eq!(usage.total_output_tokens(), 8);
    }

    #[test]
    fn zero_rates_keep_cost_zero() {
        let spec = spec(0.0, 0.0);
        let mut usage = UsageTracker::new();
        for _ in 0..100 {
            usage.record_success(1000, 1000, &spec);
        }
        assert_eq!(usage.total_cost(), 0.0);
    }

    #[test]
    fn cost_uses_per_token_rates() {
        let spec = spec(0.001, 0.002);
        let mut usage = UsageTracker::new();
        usage.record_success(100, 50, &spec);
        assert!((usage.total_cost() - (100.0 * 0.001 + 50.0 * 0.002)).abs() < 1e-12);
    }

    #[test]
    fn attempt_counts_input_only() {
        let spec = spec(0.001, 0.002);
        let mut usage = UsageTracker::new();
        usage.record_attempt(40, &spec);
        assert_eq!(usage.total_input_tokens(), 40);
        assert_eq!(usage.total_output_tokens(), 0);
        assert!((usage.total_cost() - 0.04).abs() < 1e-12);
    }
}
