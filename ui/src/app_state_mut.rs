//! Defines the reactive store the UI reads from and dispatches into.

use crate::app_state::Action;
use crate::app_state::AppState;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

/// The single shared store, provided as a Dioxus context.
///
/// Holds the current [`AppState`] snapshot in a `Signal`. Reading through
/// [`AppStore::state`] subscribes the calling component; [`AppStore::dispatch`]
/// reduces an action into a fresh snapshot and notifies every subscriber.
#[derive(Clone, Copy)]
pub struct AppStore {
    state: Signal<AppState>,
}

impl AppStore {
    pub fn new(state: Signal<AppState>) -> Self {
        Self { state }
    }

    /// The current snapshot. Subscribes the caller to future changes.
    pub fn state(&self) -> AppState {
        self.state.read().clone()
    }

    /// The current snapshot without subscribing.
    pub fn peek(&self) -> AppState {
        self.state.peek().clone()
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!("dispatch {:?}", action);
        let next = self.state.peek().apply(action);
        self.state.set(next);
    }
}

/// Provides a fresh store to the current component and its descendants.
pub fn use_app_store_provider() -> AppStore {
    let state = use_signal(AppState::new);
    use_context_provider(|| AppStore::new(state))
}

pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}
