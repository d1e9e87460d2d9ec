use crate::compat;
use crate::explorer::explorer_link;
use crate::explorer::ExplorerDataType;
use crate::hooks::use_active_connection::use_active_connection;
use crate::hooks::use_application::use_active_popups;
use crate::hooks::use_application::use_remove_popup;
use crate::state::application::PopupContent;
use crate::state::application::PopupEntry;
use dioxus::prelude::*;
use std::time::Duration;

/// Stack of visible popups in the top-right corner.
#[component]
pub fn Popups() -> Element {
    let active_popups = use_active_popups();

    rsx! {
        div {
            style: "position: fixed; top: 5rem; right: 1rem; z-index: 200; display: flex; flex-direction: column; gap: 0.5rem; max-width: 22rem;",
            for popup in active_popups() {
                PopupItem { key: "{popup.key}-{popup.serial}", popup: popup.clone() }
            }
        }
    }
}

#[component]
fn PopupItem(popup: PopupEntry) -> Element {
    let remove_popup = use_remove_popup();
    let chain_id = use_active_connection().get().chain_id;

    // The timer lives as long as this item is mounted. Re-adding a key
    // remounts the item, which drops the old timer.
    let timer_key = popup.key.clone();
    let remove_after_ms = popup.remove_after_ms;
    use_hook(move || {
        if let Some(ms) = remove_after_ms {
            spawn(async move {
                compat::sleep(Duration::from_millis(ms)).await;
                remove_popup.call(timer_key);
            });
        }
    });

    let close_key = popup.key.clone();
    let body = match &popup.content {
        PopupContent::Transaction {
            hash,
            success,
            summary,
        } => {
            let text = summary
                .clone()
                .unwrap_or_else(|| format!("Hash: {}", hash.chars().take(8).collect::<String>()));
            let icon = if *success { "✓" } else { "✗" };
            let href = chain_id.map(|id| explorer_link(id, hash, ExplorerDataType::Transaction));
            rsx! {
                p { style: "margin-bottom: 0.25rem;", "{icon} {text}" }
                if let Some(href) = href {
                    a {
                        href: "{href}",
                        target: "_blank",
                        rel: "noreferrer",
                        small { "View on Block Explorer ↗" }
                    }
                }
            }
        }
        PopupContent::ListUpdate {
            list_url,
            auto_update,
            summary,
        } => {
            let heading = if *auto_update {
                "Token list updated"
            } else {
                "Token list update available"
            };
            rsx! {
                p { style: "margin-bottom: 0.25rem;", "{heading}" }
                small { "{list_url}" }
                if let Some(summary) = summary {
                    p { small { "{summary}" } }
                }
            }
        }
    };

    rsx! {
        article {
            style: "margin: 0; padding: 1rem; position: relative;",
            a {
                href: "#",
                "aria-label": "Close",
                class: "close",
                style: "position: absolute; top: 0.5rem; right: 0.5rem;",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    remove_popup.call(close_key.clone());
                },
            }
            {body}
        }
    }
}
