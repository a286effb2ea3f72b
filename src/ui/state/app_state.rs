use dioxus::prelude::{use_hook, use_signal, Signal};

use crate::domain::entities::view::ViewState;
use crate::tables::query::{QueryField, QueryRecord};

/// Signals behind the query history view.
///
/// The raw text of numeric and date inputs is kept separately from the view
/// state so half-typed values stay on screen while the filter ignores them.
pub struct AppState {
    pub records: Signal<Vec<QueryRecord>>,
    pub view: Signal<ViewState<QueryField>>,
    pub credits_min: Signal<String>,
    pub credits_max: Signal<String>,
    pub date_start: Signal<String>,
    pub date_end: Signal<String>,
    pub status: Signal<String>,
}

impl AppState {
    /// `load` runs once, on first render, and yields the records with a
    /// status line.
    pub fn new(
        load: impl FnOnce() -> (Vec<QueryRecord>, String),
        view: impl FnOnce() -> ViewState<QueryField>,
    ) -> Self {
        // Signals are handles, so the hook hands back cheap copies.
        let (records, status) = use_hook(move || {
            let (records, status) = load();
            (Signal::new(records), Signal::new(status))
        });
        Self {
            records,
            view: use_signal(view),
            credits_min: use_signal(String::new),
            credits_max: use_signal(String::new),
            date_start: use_signal(String::new),
            date_end: use_signal(String::new),
            status,
        }
    }
}
