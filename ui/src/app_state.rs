//! The immutable application snapshot and the actions that produce new ones.

use crate::state::application::ApplicationAction;
use crate::state::application::ApplicationState;
use crate::state::transactions::TransactionAction;
use crate::state::transactions::TransactionsState;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppStateData {
    pub application: ApplicationState,
    pub transactions: TransactionsState,
}

/// A cheap-to-clone, read-only snapshot of the whole store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Application(ApplicationAction),
    Transactions(TransactionAction),
}

impl From<ApplicationAction> for Action {
    fn from(action: ApplicationAction) -> Self {
        Self::Application(action)
    }
}

impl From<TransactionAction> for Action {
    fn from(action: TransactionAction) -> Self {
        Self::Transactions(action)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces `action` into a new snapshot. `self` is left untouched.
    pub fn apply(&self, action: impl Into<Action>) -> AppState {
        let mut next = AppStateData::clone(&self.0);
        match action.into() {
            Action::Application(action) => next.application.reduce(action),
            Action::Transactions(action) => next.transactions.reduce(action),
        }
        Self(Arc::new(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::application::ApplicationModal;

    fn toggle(state: &AppState, modal: ApplicationModal) -> AppState {
        state.apply(ApplicationAction::SetOpenModal(state.application.toggled(modal)))
    }

    #[test]
    fn apply_leaves_previous_snapshot_intact() {
        let before = AppState::new();
        let after = before.apply(ApplicationAction::SetOpenModal(Some(ApplicationModal::Menu)));

        assert_eq!(before.application.open_modal(), None);
        assert_eq!(after.application.open_modal(), Some(ApplicationModal::Menu));
    }

    #[test]
    fn toggling_twice_restores_previous_state() {
        let closed = AppState::new();
        let opened = toggle(&closed, ApplicationModal::Wallet);
        assert!(opened.application.is_modal_open(ApplicationModal::Wallet));
        assert_eq!(toggle(&opened, ApplicationModal::Wallet), closed);

        let settings = closed.apply(ApplicationAction::open_modal(ApplicationModal::Settings));
        let wallet = toggle(&settings, ApplicationModal::Wallet);
        assert_eq!(wallet.application.open_modal(), Some(ApplicationModal::Wallet));
        assert_eq!(wallet.apply(ApplicationAction::close_modals()), closed);
    }
}
