#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Emits `message` through tracing at `level`, with `context` rendered as a JSON field.
pub fn log_event(level: LogLevel, message: &str, context: Option<serde_json::Value>) {
    let context = context.map(|value| value.to_string()).unwrap_or_default();
    match level {
        LogLevel::Debug => tracing::debug!(context = %context, "[Amend] {}", message),
        LogLevel::Info => tracing::info!(context = %context, "[Amend] {}", message),
        LogLevel::Warn => tracing::warn!(context = %context, "[Amend] {}", message),
        LogLevel::Error => tracing::error!(context = %context, "[Amend] {}", message),
    }
}
