//! Addressable display surface for the summary widget.
//!
//! An [`Element`] is a cheap, cloneable handle onto shared element state
//! (text content, class list, click listeners). A [`Document`] maps element
//! ids to handles and is only consulted once, when the widget resolves its
//! [`SummaryHandles`].

use super::WidgetError;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};
use tokio::{sync::Mutex, task::JoinHandle};

pub const SUMMARIZE_BUTTON_ID: &str = "summarize-btn";
pub const SUMMARY_CONTAINER_ID: &str = "summary";
pub const INCOME_TOTAL_ID: &str = "income-total";
pub const EXPENSE_TOTAL_ID: &str = "expense-total";
pub const NET_FLOW_ID: &str = "net-flow";

pub const SUMMARY_ELEMENT_IDS: [&str; 5] = [
    SUMMARIZE_BUTTON_ID,
    SUMMARY_CONTAINER_ID,
    INCOME_TOTAL_ID,
    EXPENSE_TOTAL_ID,
    NET_FLOW_ID,
];

pub const HIDDEN_CLASS: &str = "hidden";

/// Invoked on every click. Returns the task spawned for the click, if any.
pub type ClickListener = Arc<dyn Fn() -> Option<JoinHandle<()>> + Send + Sync>;

#[derive(Default)]
struct ElementState {
    text: String,
    classes: BTreeSet<String>,
    listeners: Vec<ClickListener>,
}

#[derive(Clone)]
pub struct Element {
    id: Arc<str>,
    state: Arc<Mutex<ElementState>>,
}

impl Element {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self::with_classes(id, &[])
    }

    pub fn with_classes(id: impl Into<Arc<str>>, classes: &[&str]) -> Self {
        let state = ElementState {
            classes: classes.iter().map(|class| class.to_string()).collect(),
            ..ElementState::default()
        };
        Self {
            id: id.into(),
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn text(&self) -> String {
        self.state.lock().await.text.clone()
    }

    pub async fn set_text(&self, text: impl Into<String>) {
        self.state.lock().await.text = text.into();
    }

    pub async fn has_class(&self, class: &str) -> bool {
        self.state.lock().await.classes.contains(class)
    }

    pub async fn add_class(&self, class: &str) {
        self.state.lock().await.classes.insert(class.to_string());
    }

    /// Returns whether the class was present.
    pub async fn remove_class(&self, class: &str) -> bool {
        self.state.lock().await.classes.remove(class)
    }

    pub async fn add_click_listener(&self, listener: ClickListener) {
        self.state.lock().await.listeners.push(listener);
    }

    /// Dispatches a click to every listener without waiting on the work they
    /// start. The spawned tasks are handed back to the caller.
    pub async fn click(&self) -> Vec<JoinHandle<()>> {
        let listeners = self.state.lock().await.listeners.clone();
        listeners.iter().filter_map(|listener| listener()).collect()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").field("id", &self.id).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    /// The widget's slice of the index page: trigger, hidden container and
    /// three empty text targets.
    pub fn summary_page() -> Self {
        let mut document = Self::default();
        document.insert(Element::new(SUMMARIZE_BUTTON_ID));
        document.insert(Element::with_classes(SUMMARY_CONTAINER_ID, &["panel", HIDDEN_CLASS]));
        document.insert(Element::with_classes(INCOME_TOTAL_ID, &["value"]));
        document.insert(Element::with_classes(EXPENSE_TOTAL_ID, &["value"]));
        document.insert(Element::with_classes(NET_FLOW_ID, &["value"]));
        document
    }

    /// Replaces any element already registered under the same id.
    pub fn insert(&mut self, element: Element) -> Option<Element> {
        self.elements.insert(element.id().to_string(), element)
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.elements.get(id).cloned()
    }
}

#[derive(Debug, Clone)]
pub struct SummaryHandles {
    pub trigger: Element,
    pub container: Element,
    pub income_total: Element,
    pub expense_total: Element,
    pub net_flow: Element,
}

impl SummaryHandles {
    /// Fails on the first missing id, in the order of [`SUMMARY_ELEMENT_IDS`].
    pub fn resolve(document: &Document) -> Result<Self, WidgetError> {
        let lookup = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
        };

        Ok(Self {
            trigger: lookup(SUMMARIZE_BUTTON_ID)?,
            container: lookup(SUMMARY_CONTAINER_ID)?,
            income_total: lookup(INCOME_TOTAL_ID)?,
            expense_total: lookup(EXPENSE_TOTAL_ID)?,
            net_flow: lookup(NET_FLOW_ID)?,
        })
    }
}
