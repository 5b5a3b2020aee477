//! Campus-guide specific metrics, recorded through the global `metrics`
//! recorder installed by `service_core::middleware::metrics::init_metrics`.

use metrics::{counter, histogram};
use std::time::Duration;

/// Count a guide query by outcome: `location`, `no_location` or `error`.
pub fn record_query(outcome: &'static str) {
    counter!("campus_guide_queries_total", "outcome" => outcome).increment(1);
}

/// Record how long a provider call took.
pub fn record_provider_latency(provider: &str, status: &'static str, elapsed: Duration) {
    histogram!(
        "genai_provider_latency_seconds",
        "provider" => provider.to_string(),
        "status" => status
    )
    .record(elapsed.as_secs_f64());
}

/// Count tokens reported by the provider.
pub fn record_tokens(provider: &str, input: i32, output: i32) {
    counter!("genai_tokens_total", "provider" => provider.to_string(), "type" => "input")
        .increment(input.max(0) as u64);
    counter!("genai_tokens_total", "provider" => provider.to_string(), "type" => "output")
        .increment(output.max(0) as u64);
}
