use super::source::SummaryFetchError;
use tracing::{error, warn};

/// Where the widget reports failures: a diagnostic channel and a
/// user-facing notification.
pub trait Notifier: Send + Sync {
    fn diagnostic(&self, err: &SummaryFetchError);
    fn alert(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn diagnostic(&self, err: &SummaryFetchError) {
        error!("Error fetching summary: {err}");
    }

    fn alert(&self, message: &str) {
        warn!(target: "finance_tracker::alert", "{message}");
    }
}
