//=============================================================================
// File: src/components/account_details.rs
//=============================================================================
use crate::components::pico::Card;
use crate::components::pico::CopyButton;
use crate::components::pico::TextAction;
use crate::components::transaction::TransactionRow;
use crate::connection::ActiveConnection;
use crate::connectors::connector_display_name;
use crate::explorer::explorer_link;
use crate::explorer::shorten_address;
use crate::explorer::ExplorerDataType;
use crate::hooks::use_active_connection::use_active_connection;
use crate::hooks::use_active_connection::use_injected_is_metamask;
use crate::hooks::use_transactions::use_clear_all_transactions;
use dioxus::prelude::*;

/// The transaction section of the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecentTransactions {
    /// Nothing to list; the placeholder is shown and "Clear all" is hidden.
    Empty,
    Listed {
        pending: Vec<String>,
        confirmed: Vec<String>,
    },
}

impl RecentTransactions {
    pub fn new(pending: &[String], confirmed: &[String]) -> Self {
        if pending.is_empty() && confirmed.is_empty() {
            Self::Empty
        } else {
            Self::Listed {
                pending: pending.to_vec(),
                confirmed: confirmed.to_vec(),
            }
        }
    }

    pub fn shows_clear_all(&self) -> bool {
        matches!(self, Self::Listed { .. })
    }
}

/// Everything the panel displays, derived from the connection and props.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountPanelModel {
    pub wallet_name: Option<&'static str>,
    pub show_disconnect: bool,
    pub show_change: bool,
    /// ENS name if known, else the shortened account.
    pub display_name: Option<String>,
    /// Full checksummed account for the copy control.
    pub copy_text: Option<String>,
    pub explorer_url: Option<String>,
    pub recent: RecentTransactions,
}

impl AccountPanelModel {
    pub fn new(
        connection: &ActiveConnection,
        ens_name: Option<&str>,
        injected_is_metamask: bool,
        pending: &[String],
        confirmed: &[String],
    ) -> Self {
        let connector = connection.connector;
        let account = connection.account.map(|a| a.to_checksum(None));

        let display_name = match (ens_name, &connection.account) {
            (Some(name), _) => Some(name.to_string()),
            (None, Some(account)) => Some(shorten_address(account, 4)),
            (None, None) => None,
        };

        let explorer_url = match (connection.chain_id, &account) {
            (Some(chain_id), Some(account)) => Some(explorer_link(
                chain_id,
                ens_name.unwrap_or(account.as_str()),
                ExplorerDataType::Address,
            )),
            _ => None,
        };

        Self {
            wallet_name: connector.and_then(|c| connector_display_name(c, injected_is_metamask)),
            show_disconnect: connector.is_some_and(|c| c.supports_disconnect()),
            show_change: connector.is_some_and(|c| c.supports_change()),
            display_name,
            copy_text: account,
            explorer_url,
            recent: RecentTransactions::new(pending, confirmed),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccountDetailsProps {
    pub toggle_wallet_modal: EventHandler<()>,
    pub pending_transactions: Vec<String>,
    pub confirmed_transactions: Vec<String>,
    #[props(default)]
    pub ens_name: Option<String>,
    pub open_options: EventHandler<()>,
}

#[component]
pub fn AccountDetails(props: AccountDetailsProps) -> Element {
    let mut web3 = use_active_connection();
    let injected_is_metamask = use_injected_is_metamask();
    let clear_all = use_clear_all_transactions();

    let model = AccountPanelModel::new(
        &web3.get(),
        props.ens_name.as_deref(),
        injected_is_metamask,
        &props.pending_transactions,
        &props.confirmed_transactions,
    );
    let toggle_wallet_modal = props.toggle_wallet_modal;
    let open_options = props.open_options;

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center;",
            h5 { style: "margin: 0;", "Account" }
            a {
                href: "#",
                "aria-label": "Close",
                class: "close",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    toggle_wallet_modal.call(());
                },
            }
        }
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 1rem;",
                if let Some(name) = model.wallet_name {
                    small { "Connected with {name}" }
                }
                if model.show_disconnect {
                    TextAction {
                        on_click: move |_| web3.disconnect(),
                        "Disconnect"
                    }
                }
                if model.show_change {
                    TextAction {
                        on_click: move |_| open_options.call(()),
                        "Change"
                    }
                }
            }
            if let Some(display_name) = &model.display_name {
                h5 { style: "margin: 0.75rem 0;", "{display_name}" }
            }
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                if let Some(account) = &model.copy_text {
                    CopyButton {
                        text_to_copy: account.clone(),
                        label: "Copy Address".to_string(),
                    }
                }
                if let Some(url) = &model.explorer_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noreferrer",
                        small { "View on Block Explorer ↗" }
                    }
                }
            }
        }
        div {
            match &model.recent {
                RecentTransactions::Empty => rsx! {
                    small { "Your transactions will appear here..." }
                },
                RecentTransactions::Listed { pending, confirmed } => rsx! {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem;",
                        small { "Recent Transactions" }
                        TextAction {
                            on_click: move |_| clear_all.call(()),
                            "Clear all"
                        }
                    }
                    div {
                        for hash in pending {
                            TransactionRow { key: "{hash}", hash: hash.clone() }
                        }
                    }
                    div {
                        for hash in confirmed {
                            TransactionRow { key: "{hash}", hash: hash.clone() }
                        }
                    }
                },
            }
        }
    }
}
