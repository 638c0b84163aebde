use serde::Serialize;
use tracing::{info, warn};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Danger,
    Success,
}

/// Transient user notification (toast). Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that writes to the log, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => info!("{}", message),
            Severity::Warning | Severity::Danger => warn!("[{:?}] {}", severity, message),
        }
    }
}
