use crate::explorer::explorer_link;
use crate::explorer::ExplorerDataType;
use crate::hooks::use_active_connection::use_active_connection;
use crate::hooks::use_transactions::use_transaction;
use dioxus::prelude::*;

/// One row in the account panel's transaction list.
#[component]
pub fn TransactionRow(hash: String) -> Element {
    let chain_id = use_active_connection().get().chain_id;
    let tx = use_transaction(&hash);

    let label = tx
        .as_ref()
        .and_then(|tx| tx.summary.clone())
        .unwrap_or_else(|| hash.clone());
    // None: unknown to this front-end. Some(None): pending.
    let status = tx.as_ref().map(|tx| tx.receipt.map(|receipt| receipt.success));

    let Some(chain_id) = chain_id else {
        return rsx! {};
    };
    let href = explorer_link(chain_id, &hash, ExplorerDataType::Transaction);

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 0.25rem 0;",
            a {
                href: "{href}",
                target: "_blank",
                rel: "noreferrer",
                small { "{label} ↗" }
            }
            match status {
                Some(None) => rsx! { span { "aria-busy": "true" } },
                Some(Some(true)) => rsx! { span { style: "color: var(--pico-ins-color);", "✓" } },
                Some(Some(false)) => rsx! { span { style: "color: var(--pico-del-color);", "✗" } },
                None => rsx! {},
            }
        }
    }
}
