// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

pub mod app_state;
pub mod app_state_mut;
pub mod compat;
pub mod components;
pub mod connection;
pub mod connectors;
pub mod explorer;
pub mod hooks;
pub mod prefs;
pub mod state;

use app_state_mut::use_app_store_provider;
use components::account_details::AccountDetails;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use components::pico::NoTitleModal;
use components::popups::Popups;
use components::question_helper::QuestionHelper;
use connection::ActiveConnection;
use connectors::SUPPORTED_WALLETS;
use explorer::shorten_address;
use hooks::use_active_connection::use_active_connection;
use hooks::use_active_connection::use_web3_provider;
use hooks::use_application::use_block_number;
use hooks::use_application::use_close_modals;
use hooks::use_application::use_eth_price;
use hooks::use_application::use_modal_open;
use hooks::use_application::use_wallet_modal_toggle;
use hooks::use_transactions::use_recent_transactions;
use prefs::UiPrefs;
use state::application::ApplicationModal;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    html, body { height: 100%; margin: 0; }

    .app-header nav { --pico-nav-element-spacing-vertical: 0.5rem; }

    .status-bar {
        position: fixed;
        bottom: 0.5rem;
        right: 1rem;
        display: flex;
        gap: 1rem;
        color: var(--pico-muted-color);
    }

    .wallet-option {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
    }
    .wallet-option button { flex: 1; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

/// Installs the prefs, store and connection contexts, then lays out the page.
#[component]
fn AppBody() -> Element {
    let prefs = use_context_provider(UiPrefs::from_env);
    use_app_store_provider();
    use_web3_provider(ActiveConnection::on_chain(prefs.default_chain_id()));

    use_hook(|| info!("prefs: {:?}", prefs));

    rsx! {
        Container {
            header {
                class: "app-header",
                nav {
                    ul {
                        li { strong { "DEX" } }
                    }
                    ul {
                        li { Web3Status {} }
                    }
                }
            }
            WalletModal {}
            Popups {}
            StatusBar {}
        }
    }
}

/// The account button in the header. Shows the pending count while
/// transactions are in flight.
#[component]
fn Web3Status() -> Element {
    let connection = use_active_connection().get();
    let toggle_wallet_modal = use_wallet_modal_toggle();
    let (pending, _) = use_recent_transactions();

    let label = match connection.account {
        Some(_) if !pending.is_empty() => format!("{} Pending", pending.len()),
        Some(account) => shorten_address(&account, 4),
        None => "Connect Wallet".to_string(),
    };
    let button_type = if connection.account.is_some() {
        ButtonType::Secondary
    } else {
        ButtonType::Primary
    };

    rsx! {
        Button {
            button_type,
            outline: connection.account.is_some(),
            on_click: move |_| toggle_wallet_modal.call(()),
            "{label}"
        }
    }
}

#[component]
fn WalletModal() -> Element {
    let is_open = use_modal_open(ApplicationModal::Wallet);
    let toggle_wallet_modal = use_wallet_modal_toggle();
    let close_modals = use_close_modals();
    let connection = use_active_connection().get();
    let (pending, confirmed) = use_recent_transactions();
    let mut show_options = use_signal(|| false);

    rsx! {
        NoTitleModal {
            is_open,
            on_close: move |_| {
                show_options.set(false);
                close_modals.call(());
            },
            if connection.is_connected() && !show_options() {
                AccountDetails {
                    toggle_wallet_modal,
                    pending_transactions: pending,
                    confirmed_transactions: confirmed,
                    open_options: move |_| show_options.set(true),
                }
            } else {
                WalletOptions {
                    on_done: move |_| show_options.set(false),
                }
            }
        }
    }
}

/// The wallet picker. Selecting an entry only records the choice and closes
/// the picker; no connector is bundled. An external connector integration
/// establishes the session and reports it through
/// [`Web3Handle::connect`](connection::Web3Handle::connect), which is what
/// makes `AccountDetails` reachable.
#[component]
fn WalletOptions(on_done: EventHandler<()>) -> Element {
    let is_mobile = cfg!(any(target_os = "android", target_os = "ios"));

    rsx! {
        h5 { "Connect to a wallet" }
        for wallet in SUPPORTED_WALLETS.iter().filter(|w| is_mobile || !w.mobile_only) {
            div {
                key: "{wallet.key}",
                class: "wallet-option",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        info!("wallet selected: {} ({})", wallet.name, wallet.connector);
                        on_done.call(());
                    },
                    "{wallet.name}"
                }
                QuestionHelper { text: wallet.description.to_string() }
            }
        }
    }
}

/// Latest block and ETH price, when known.
#[component]
fn StatusBar() -> Element {
    let block_number = use_block_number();
    let eth_price = use_eth_price();
    let price = eth_price.value.map(|p| format!("{:.2}", p.price));

    rsx! {
        div {
            class: "status-bar",
            if let Some(price) = price {
                small { "ETH ${price}" }
            }
            if let Some(block_number) = block_number {
                small { title: "Latest block", "#{block_number}" }
            }
        }
    }
}
