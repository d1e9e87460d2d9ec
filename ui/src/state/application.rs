//! The `application` slice: modal visibility, popups, block numbers and
//! the cached price/token payloads fed by the data-fetching layer.

use alloy_primitives::ChainId;
use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Every modal the application knows about. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum ApplicationModal {
    Wallet,
    Settings,
    SelfClaim,
    AddressClaim,
    ClaimPopup,
    Menu,
    Delegate,
    Vote,
}

/// What a popup shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PopupContent {
    Transaction {
        hash: String,
        success: bool,
        summary: Option<String>,
    },
    ListUpdate {
        list_url: String,
        auto_update: bool,
        summary: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopupEntry {
    pub key: String,
    pub content: PopupContent,
    pub show: bool,
    /// Bumped on every add, so a re-added key is a new instance.
    pub serial: u64,
    /// `None` means the popup stays until dismissed.
    pub remove_after_ms: Option<u64>,
}

/// ETH/USD price snapshot as delivered by the price feed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EthPrice {
    pub price: f64,
    pub one_day_price: f64,
    pub eth_price_change: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApplicationAction {
    UpdateBlockNumber {
        chain_id: ChainId,
        block_number: u64,
    },
    SetOpenModal(Option<ApplicationModal>),
    AddPopup {
        content: PopupContent,
        key: Option<String>,
        remove_after_ms: Option<u64>,
    },
    RemovePopup {
        key: String,
    },
    UpdateEthPrice(EthPrice),
    UpdateGlobalData(Value),
    UpdateTopTokens(Value),
    UpdateTokenPairs(Value),
    UpdateSwapTokenPrice0(Value),
    UpdateSwapTokenPrice1(Value),
}

impl ApplicationAction {
    pub fn open_modal(modal: ApplicationModal) -> Self {
        Self::SetOpenModal(Some(modal))
    }

    pub fn close_modals() -> Self {
        Self::SetOpenModal(None)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationState {
    block_number: HashMap<ChainId, u64>,
    open_modal: Option<ApplicationModal>,
    popup_list: Vec<PopupEntry>,
    next_popup_id: u64,
    popups_added: u64,
    eth_price: Option<EthPrice>,
    global_data: Option<Value>,
    top_tokens: Option<Value>,
    token_pairs: Option<Value>,
    swap_token_price0: Option<Value>,
    swap_token_price1: Option<Value>,
}

impl ApplicationState {
    /// Applies `action` in place. Every action is total: unknown keys and
    /// repeated writes are accepted silently.
    pub fn reduce(&mut self, action: ApplicationAction) {
        match action {
            ApplicationAction::UpdateBlockNumber {
                chain_id,
                block_number,
            } => {
                self.block_number.insert(chain_id, block_number);
            }
            ApplicationAction::SetOpenModal(modal) => self.open_modal = modal,
            ApplicationAction::AddPopup {
                content,
                key,
                remove_after_ms,
            } => {
                let key = match key {
                    Some(key) => {
                        self.popup_list.retain(|popup| popup.key != key);
                        key
                    }
                    None => self.generate_popup_key(),
                };
                self.popups_added += 1;
                debug!("adding popup {key} (#{})", self.popups_added);
                self.popup_list.push(PopupEntry {
                    key,
                    content,
                    show: true,
                    serial: self.popups_added,
                    remove_after_ms,
                });
            }
            ApplicationAction::RemovePopup { key } => {
                self.popup_list
                    .iter_mut()
                    .filter(|popup| popup.key == key)
                    .for_each(|popup| popup.show = false);
            }
            ApplicationAction::UpdateEthPrice(price) => self.eth_price = Some(price),
            ApplicationAction::UpdateGlobalData(data) => self.global_data = Some(data),
            ApplicationAction::UpdateTopTokens(data) => self.top_tokens = Some(data),
            ApplicationAction::UpdateTokenPairs(data) => self.token_pairs = Some(data),
            ApplicationAction::UpdateSwapTokenPrice0(data) => self.swap_token_price0 = Some(data),
            ApplicationAction::UpdateSwapTokenPrice1(data) => self.swap_token_price1 = Some(data),
        }
    }

    fn generate_popup_key(&mut self) -> String {
        loop {
            self.next_popup_id += 1;
            let candidate = format!("popup-{}", self.next_popup_id);
            if !self.popup_list.iter().any(|popup| popup.key == candidate) {
                return candidate;
            }
        }
    }

    pub fn block_number(&self, chain_id: Option<ChainId>) -> Option<u64> {
        chain_id.and_then(|id| self.block_number.get(&id).copied())
    }

    pub fn open_modal(&self) -> Option<ApplicationModal> {
        self.open_modal
    }

    pub fn is_modal_open(&self, modal: ApplicationModal) -> bool {
        self.open_modal == Some(modal)
    }

    /// The open modal after toggling `modal`: closed if it was the open one,
    /// otherwise it replaces whatever was open.
    pub fn toggled(&self, modal: ApplicationModal) -> Option<ApplicationModal> {
        if self.is_modal_open(modal) {
            None
        } else {
            Some(modal)
        }
    }

    /// The full stored list, hidden entries included.
    pub fn popup_list(&self) -> &[PopupEntry] {
        &self.popup_list
    }

    /// Visible popups in insertion order.
    pub fn active_popups(&self) -> Vec<PopupEntry> {
        self.popup_list
            .iter()
            .filter(|popup| popup.show)
            .cloned()
            .collect()
    }

    pub fn eth_price(&self) -> Option<EthPrice> {
        self.eth_price
    }

    pub fn global_data(&self) -> Option<Value> {
        self.global_data.clone()
    }

    pub fn top_tokens(&self) -> Option<Value> {
        self.top_tokens.clone()
    }

    pub fn token_pairs(&self) -> Option<Value> {
        self.token_pairs.clone()
    }

    pub fn swap_token_price0(&self) -> Option<Value> {
        self.swap_token_price0.clone()
    }

    pub fn swap_token_price1(&self) -> Option<Value> {
        self.swap_token_price1.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx_popup(hash: &str) -> PopupContent {
        PopupContent::Transaction {
            hash: hash.to_string(),
            success: true,
            summary: None,
        }
    }

    fn add(state: &mut ApplicationState, key: Option<&str>) {
        state.reduce(ApplicationAction::AddPopup {
            content: tx_popup("0xabc"),
            key: key.map(str::to_string),
            remove_after_ms: Some(15_000),
        });
    }

    #[test]
    fn opening_a_modal_closes_the_previous_one() {
        let mut state = ApplicationState::default();
        state.reduce(ApplicationAction::SetOpenModal(Some(ApplicationModal::Wallet)));
        state.reduce(ApplicationAction::SetOpenModal(Some(ApplicationModal::Settings)));

        assert!(state.is_modal_open(ApplicationModal::Settings));
        assert!(!state.is_modal_open(ApplicationModal::Wallet));
        assert_eq!(state.open_modal(), Some(ApplicationModal::Settings));
    }

    #[test]
    fn keyed_popup_is_hidden_not_deleted() {
        let mut state = ApplicationState::default();
        add(&mut state, Some("k"));

        let active = state.active_popups();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, "k");
        assert!(active[0].show);

        state.reduce(ApplicationAction::RemovePopup {
            key: "k".to_string(),
        });
        assert!(state.active_popups().is_empty());
        assert_eq!(state.popup_list().len(), 1);
        assert!(!state.popup_list()[0].show);
    }

    #[test]
    fn removing_unknown_popup_changes_nothing() {
        let mut state = ApplicationState::default();
        add(&mut state, Some("k"));
        let before = state.clone();

        state.reduce(ApplicationAction::RemovePopup {
            key: "missing".to_string(),
        });
        assert_eq!(state, before);
    }

    #[test]
    fn keyless_popups_get_distinct_keys() {
        let mut state = ApplicationState::default();
        add(&mut state, None);
        add(&mut state, None);

        let keys: Vec<_> = state.popup_list().iter().map(|p| p.key.clone()).collect();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn generated_key_skips_user_supplied_collision() {
        let mut state = ApplicationState::default();
        add(&mut state, Some("popup-1"));
        add(&mut state, None);

        assert_eq!(state.popup_list()[1].key, "popup-2");
    }

    #[test]
    fn same_key_replaces_previous_entry() {
        let mut state = ApplicationState::default();
        add(&mut state, Some("a"));
        add(&mut state, Some("b"));
        state.reduce(ApplicationAction::AddPopup {
            content: tx_popup("0xdef"),
            key: Some("a".to_string()),
            remove_after_ms: None,
        });

        let keys: Vec<_> = state.active_popups().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(state.popup_list()[1].remove_after_ms, None);
    }

    #[test]
    fn re_adding_a_visible_key_is_a_new_instance() {
        let mut state = ApplicationState::default();
        add(&mut state, Some("tx"));
        let first = state.active_popups()[0].serial;

        state.reduce(ApplicationAction::AddPopup {
            content: tx_popup("0xabc"),
            key: Some("tx".to_string()),
            remove_after_ms: Some(1_000),
        });

        let active = state.active_popups();
        assert_eq!(active.len(), 1);
        assert_ne!(active[0].serial, first);
        assert_eq!(active[0].remove_after_ms, Some(1_000));
    }

    #[test]
    fn toggling_closes_only_the_open_modal() {
        let mut state = ApplicationState::default();
        assert_eq!(state.toggled(ApplicationModal::Wallet), Some(ApplicationModal::Wallet));

        state.reduce(ApplicationAction::open_modal(ApplicationModal::Wallet));
        assert_eq!(state.toggled(ApplicationModal::Wallet), None);
        assert_eq!(state.toggled(ApplicationModal::Settings), Some(ApplicationModal::Settings));

        state.reduce(ApplicationAction::close_modals());
        assert_eq!(state.open_modal(), None);
    }

    #[test]
    fn active_popups_keep_insertion_order() {
        let mut state = ApplicationState::default();
        for key in ["one", "two", "three"] {
            add(&mut state, Some(key));
        }
        state.reduce(ApplicationAction::RemovePopup {
            key: "two".to_string(),
        });

        let keys: Vec<_> = state.active_popups().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["one", "three"]);
    }

    #[test]
    fn eth_price_write_replaces_whole_payload() {
        let mut state = ApplicationState::default();
        assert_eq!(state.eth_price(), None);

        state.reduce(ApplicationAction::UpdateEthPrice(EthPrice {
            price: 50.0,
            one_day_price: 40.0,
            eth_price_change: 0.25,
        }));
        let latest = EthPrice {
            price: 100.0,
            one_day_price: 90.0,
            eth_price_change: 0.11,
        };
        state.reduce(ApplicationAction::UpdateEthPrice(latest));

        assert_eq!(state.eth_price(), Some(latest));
    }

    #[test]
    fn opaque_slices_are_independent() {
        let mut state = ApplicationState::default();
        state.reduce(ApplicationAction::UpdateGlobalData(json!({ "totalVolumeUSD": 1 })));
        state.reduce(ApplicationAction::UpdateTopTokens(json!([{ "symbol": "QUICK" }])));
        state.reduce(ApplicationAction::UpdateGlobalData(json!({ "pairCount": 7 })));

        assert_eq!(state.global_data(), Some(json!({ "pairCount": 7 })));
        assert_eq!(state.top_tokens(), Some(json!([{ "symbol": "QUICK" }])));
        assert_eq!(state.token_pairs(), None);
        assert_eq!(state.swap_token_price0(), None);
        assert_eq!(state.swap_token_price1(), None);
    }

    #[test]
    fn block_number_is_scoped_per_chain() {
        let mut state = ApplicationState::default();
        assert_eq!(state.block_number(Some(1)), None);
        assert_eq!(state.block_number(None), None);

        state.reduce(ApplicationAction::UpdateBlockNumber {
            chain_id: 1,
            block_number: 100,
        });
        state.reduce(ApplicationAction::UpdateBlockNumber {
            chain_id: 1,
            block_number: 101,
        });

        assert_eq!(state.block_number(Some(1)), Some(101));
        assert_eq!(state.block_number(Some(137)), None);
    }
}
