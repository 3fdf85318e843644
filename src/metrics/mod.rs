// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::{health_handler, metrics_handler};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Customer operation outcomes (success, validation, not_found, conflict, error)
// - Validation failures by rule
// - Operation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Operation outcome label values
pub mod outcome {
    pub const SUCCESS: &str = "success";
    pub const VALIDATION: &str = "validation";
    pub const NOT_FOUND: &str = "not_found";
    pub const CONFLICT: &str = "conflict";
    pub const ERROR: &str = "error";
}

pub struct Metrics {
    registry: Registry,

    pub operations_total: IntCounterVec,
    pub validation_failures: IntCounterVec,
    pub operation_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let operations_total = IntCounterVec::new(
            Opts::new("customer_operations_total", "Total customer operations by outcome"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(operations_total.clone()))?;

        let validation_failures = IntCounterVec::new(
            Opts::new(
                "customer_validation_failures_total",
                "Customer payloads rejected, by violated rule",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(validation_failures.clone()))?;

        let operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "customer_operation_duration_seconds",
                "Customer operation duration",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["operation"],
        )?;
        registry.register(Box::new(operation_duration.clone()))?;

        Ok(Self {
            registry,
            operations_total,
            validation_failures,
            operation_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_operation(&self, operation: &str, outcome: &str, duration_secs: f64) {
        self.operations_total.with_label_values(&[operation, outcome]).inc();
        self.operation_duration.with_label_values(&[operation]).observe(duration_secs);
    }

    pub fn record_validation_failure(&self, reason: &str) {
        self.validation_failures.with_label_values(&[reason]).inc();
    }
}
