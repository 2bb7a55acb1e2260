use std::sync::Once;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "attribute_service=debug,info,diesel=warn,hyper=warn,tower=warn";

/// Slow repository calls are reported at `warn` above this threshold.
const SLOW_OPERATION_MS: u64 = 250;

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let initialized = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false))
            .try_init();

        // A test harness may have installed a global subscriber already
        if initialized.is_ok() {
            info!("Logging system initialized");
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!(error = %error, "{}", context);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        if duration_ms >= SLOW_OPERATION_MS {
            warn!(
                operation,
                duration_ms,
                info = additional_info.unwrap_or_default(),
                "Slow operation"
            );
        } else {
            debug!(
                operation,
                duration_ms,
                info = additional_info.unwrap_or_default(),
                "Operation finished"
            );
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!(operation, "Starting");
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, None);
        duration
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
