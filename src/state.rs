//! Fetch-lifecycle state machine for a dashboard widget.
//!
//! Each widget owns a `FetchState` and feeds it events: the surrounding
//! shell reports query changes and completed fetches, the rendering layer
//! observes the resulting state. The reducer is pure; all I/O stays in the
//! fetching collaborator.

/// Lifecycle of one widget's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// A fetch is in flight; any previous data has been discarded.
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The data to render, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Events driving the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent<T> {
    /// The dashboard filters changed; current data is stale.
    QueryChanged,
    Loaded(T),
    Errored(String),
}

/// Pure transition function.
///
/// A query change always restarts loading. Fetch outcomes only apply while
/// loading; a response landing after the query has already moved on is
/// dropped rather than overwriting fresher state.
pub fn reduce<T>(state: FetchState<T>, event: FetchEvent<T>) -> FetchState<T> {
    match (state, event) {
        (_, FetchEvent::QueryChanged) => FetchState::Loading,
        (FetchState::Loading, FetchEvent::Loaded(data)) => FetchState::Ready(data),
        (FetchState::Loading, FetchEvent::Errored(msg)) => FetchState::Failed(msg),
        (state, _) => state,
    }
}
