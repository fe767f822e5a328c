//! Summary widget controller.
//!
//! A click on the trigger element fetches the summary, writes the three
//! totals into their text targets and reveals the container. Failures are
//! reported through the [`Notifier`] and leave the container untouched.
//!
//! Each click runs as its own task. Overlapping requests are not
//! deduplicated; whichever response resolves last is what the display shows.

pub mod dom;
pub mod notify;
pub mod source;

pub use dom::{Document, Element, SummaryHandles};
pub use notify::{Notifier, TracingNotifier};
pub use source::{HttpSummarySource, SummaryFetchError, SummarySource};

use crate::models::SummaryResponse;
use dom::HIDDEN_CLASS;
use std::sync::Arc;
use thiserror::Error;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::debug;

pub const FAILURE_MESSAGE: &str = "Error fetching summary. Please try again.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("summary widget: missing element #{0}")]
    MissingElement(String),
}

/// Fixes `value` to two decimals, rounding exact ties away from zero.
///
/// Unlike `Number.prototype.toFixed`, magnitudes of 1e21 and above are still
/// printed digit by digit rather than in exponential notation.
pub fn format_amount(value: f64) -> String {
    // -0.0 prints as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };

    // Ties are only representable for multiples of 1/8.
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return format!("{:.2}", scaled.round() / 100.0);
    }
    format!("{value:.2}")
}

pub struct SummaryWidget {
    handles: SummaryHandles,
    source: Arc<dyn SummarySource>,
    notifier: Arc<dyn Notifier>,
    render: Mutex<()>,
}

impl SummaryWidget {
    pub fn new(
        handles: SummaryHandles,
        source: Arc<dyn SummarySource>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        Arc::new(Self {
            handles,
            source,
            notifier,
            render: Mutex::new(()),
        })
    }

    /// Resolves the five handles from `document` and binds the trigger.
    pub async fn attach(
        document: &Document,
        source: Arc<dyn SummarySource>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Arc<Self>, WidgetError> {
        let handles = SummaryHandles::resolve(document)?;
        let widget = Self::new(handles, source, notifier);
        widget.bind().await;
        Ok(widget)
    }

    pub fn handles(&self) -> &SummaryHandles {
        &self.handles
    }

    /// Registers the click listener. The listener holds a weak reference so
    /// the trigger does not keep the widget alive.
    pub async fn bind(self: &Arc<Self>) {
        let widget = Arc::downgrade(self);
        self.handles
            .trigger
            .add_click_listener(Arc::new(move || {
                widget.upgrade().map(|widget| widget.spawn_request())
            }))
            .await;
    }

    pub fn spawn_request(self: &Arc<Self>) -> JoinHandle<()> {
        let widget = Arc::clone(self);
        tokio::spawn(async move {
            let _ = widget.request_summary().await;
        })
    }

    /// Fetches and renders one summary. Failures are reported before being
    /// returned, so callers may ignore the result.
    pub async fn request_summary(&self) -> Result<SummaryResponse, SummaryFetchError> {
        debug!("requesting summary");
        match self.source.fetch_summary().await {
            Ok(summary) => {
                self.render(&summary).await;
                Ok(summary)
            }
            Err(err) => {
                self.notifier.diagnostic(&err);
                self.notifier.alert(FAILURE_MESSAGE);
                Err(err)
            }
        }
    }

    async fn render(&self, summary: &SummaryResponse) {
        let _guard = self.render.lock().await;
        let handles = &self.handles;
        handles.income_total.set_text(format_amount(summary.income_total)).await;
        handles.expense_total.set_text(format_amount(summary.expense_total)).await;
        handles.net_flow.set_text(format_amount(summary.net_flow)).await;
        handles.container.remove_class(HIDDEN_CLASS).await;
    }
}
