//! Accessor/mutator hooks over the `application` slice.
//!
//! Readers subscribe the calling component to the store; mutators return a
//! `Callback` that performs exactly one dispatch when called.

use crate::app_state_mut::use_app_store;
use crate::hooks::use_active_connection::use_active_connection;
use crate::prefs::UiPrefs;
use crate::state::application::ApplicationAction;
use crate::state::application::ApplicationModal;
use crate::state::application::ApplicationState;
use crate::state::application::EthPrice;
use crate::state::application::PopupContent;
use crate::state::application::PopupEntry;
use dioxus::prelude::*;
use serde_json::Value;

/// Latest block on the active chain, if one has been observed.
pub fn use_block_number() -> Option<u64> {
    let chain_id = use_active_connection().get().chain_id;
    use_app_store().state().application.block_number(chain_id)
}

pub fn use_modal_open(modal: ApplicationModal) -> bool {
    use_app_store().state().application.is_modal_open(modal)
}

/// Opens `modal`, or closes it if it is the one currently open.
pub fn use_toggle_modal(modal: ApplicationModal) -> Callback<()> {
    let mut store = use_app_store();
    use_callback(move |_: ()| {
        let next = store.peek().application.toggled(modal);
        store.dispatch(ApplicationAction::SetOpenModal(next));
    })
}

pub fn use_open_modal(modal: ApplicationModal) -> Callback<()> {
    let mut store = use_app_store();
    use_callback(move |_: ()| store.dispatch(ApplicationAction::open_modal(modal)))
}

pub fn use_close_modals() -> Callback<()> {
    let mut store = use_app_store();
    use_callback(move |_: ()| store.dispatch(ApplicationAction::close_modals()))
}

pub fn use_wallet_modal_toggle() -> Callback<()> {
    use_toggle_modal(ApplicationModal::Wallet)
}

pub fn use_toggle_settings_menu() -> Callback<()> {
    use_toggle_modal(ApplicationModal::Settings)
}

pub fn use_show_claim_popup() -> bool {
    use_modal_open(ApplicationModal::ClaimPopup)
}

pub fn use_toggle_show_claim_popup() -> Callback<()> {
    use_toggle_modal(ApplicationModal::ClaimPopup)
}

pub fn use_toggle_self_claim_modal() -> Callback<()> {
    use_toggle_modal(ApplicationModal::SelfClaim)
}

/// How long a new popup stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemoveAfter {
    /// Use the configured popup timeout.
    #[default]
    Default,
    Never,
    Millis(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopupRequest {
    content: PopupContent,
    key: Option<String>,
    remove_after: RemoveAfter,
}

impl PopupRequest {
    pub fn new(content: PopupContent) -> Self {
        Self {
            content,
            key: None,
            remove_after: RemoveAfter::Default,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn remove_after(mut self, remove_after: RemoveAfter) -> Self {
        self.remove_after = remove_after;
        self
    }

    fn into_action(self, prefs: &UiPrefs) -> ApplicationAction {
        let remove_after_ms = match self.remove_after {
            RemoveAfter::Default => prefs.popup_timeout_ms(),
            RemoveAfter::Never => None,
            RemoveAfter::Millis(ms) => Some(ms),
        };
        ApplicationAction::AddPopup {
            content: self.content,
            key: self.key,
            remove_after_ms,
        }
    }
}

pub fn use_add_popup() -> Callback<PopupRequest> {
    let mut store = use_app_store();
    let prefs = use_context::<UiPrefs>();
    use_callback(move |request: PopupRequest| store.dispatch(request.into_action(&prefs)))
}

pub fn use_remove_popup() -> Callback<String> {
    let mut store = use_app_store();
    use_callback(move |key: String| store.dispatch(ApplicationAction::RemovePopup { key }))
}

/// Visible popups, recomputed whenever the stored list changes.
pub fn use_active_popups() -> Memo<Vec<PopupEntry>> {
    let store = use_app_store();
    use_memo(move || store.state().application.active_popups())
}

/// A cached payload together with the callback that replaces it.
#[derive(Clone)]
pub struct CachedSlice<T: 'static> {
    pub value: Option<T>,
    pub update: Callback<T>,
}

fn use_cached_slice<T: Clone + 'static>(
    read: fn(&ApplicationState) -> Option<T>,
    write: fn(T) -> ApplicationAction,
) -> CachedSlice<T> {
    let mut store = use_app_store();
    let value = read(&store.state().application);
    let update = use_callback(move |payload: T| store.dispatch(write(payload)));
    CachedSlice { value, update }
}

pub fn use_eth_price() -> CachedSlice<EthPrice> {
    use_cached_slice(ApplicationState::eth_price, ApplicationAction::UpdateEthPrice)
}

pub fn use_global_data() -> CachedSlice<Value> {
    use_cached_slice(ApplicationState::global_data, ApplicationAction::UpdateGlobalData)
}

pub fn use_top_tokens() -> CachedSlice<Value> {
    use_cached_slice(ApplicationState::top_tokens, ApplicationAction::UpdateTopTokens)
}

pub fn use_token_pairs() -> CachedSlice<Value> {
    use_cached_slice(ApplicationState::token_pairs, ApplicationAction::UpdateTokenPairs)
}

pub fn use_swap_token_price0() -> CachedSlice<Value> {
    use_cached_slice(
        ApplicationState::swap_token_price0,
        ApplicationAction::UpdateSwapTokenPrice0,
    )
}

pub fn use_swap_token_price1() -> CachedSlice<Value> {
    use_cached_slice(
        ApplicationState::swap_token_price1,
        ApplicationAction::UpdateSwapTokenPrice1,
    )
}
