use crate::app_state_mut::use_app_store;
use crate::hooks::use_active_connection::use_active_connection;
use crate::hooks::use_application::use_add_popup;
use crate::hooks::use_application::PopupRequest;
use crate::state::application::PopupContent;
use crate::state::transactions::TransactionAction;
use crate::state::transactions::TransactionDetails;
use crate::state::transactions::TransactionReceipt;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use web_time::SystemTime;
use web_time::UNIX_EPOCH;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// `(pending, confirmed)` hashes for the active account on the active chain.
pub fn use_recent_transactions() -> (Vec<String>, Vec<String>) {
    let connection = use_active_connection().get();
    use_app_store()
        .state()
        .transactions
        .recent_transactions(connection.chain_id, connection.account)
}

pub fn use_transaction(hash: &str) -> Option<TransactionDetails> {
    let chain_id = use_active_connection().get().chain_id;
    let state = use_app_store().state();
    state.transactions.get(chain_id?, hash).cloned()
}

/// Records a freshly submitted transaction: `(hash, summary)`.
pub fn use_transaction_adder() -> Callback<(String, Option<String>)> {
    let mut store = use_app_store();
    let web3 = use_active_connection();
    use_callback(move |(hash, summary): (String, Option<String>)| {
        let connection = web3.peek();
        let (Some(chain_id), Some(from)) = (connection.chain_id, connection.account) else {
            warn!("cannot record transaction {hash} without an active account");
            return;
        };
        store.dispatch(TransactionAction::AddTransaction {
            chain_id,
            hash,
            from,
            summary,
            added_time: now_ms(),
        });
    })
}

/// Marks a transaction as mined and announces the result in a popup keyed
/// by the transaction hash.
pub fn use_transaction_finalizer() -> Callback<(String, TransactionReceipt)> {
    let mut store = use_app_store();
    let web3 = use_active_connection();
    let add_popup = use_add_popup();
    use_callback(move |(hash, receipt): (String, TransactionReceipt)| {
        let Some(chain_id) = web3.peek().chain_id else {
            return;
        };
        let summary = store
            .peek()
            .transactions
            .get(chain_id, &hash)
            .and_then(|tx| tx.summary.clone());
        store.dispatch(TransactionAction::FinalizeTransaction {
            chain_id,
            hash: hash.clone(),
            receipt,
            confirmed_time: now_ms(),
        });
        add_popup.call(
            PopupRequest::new(PopupContent::Transaction {
                hash: hash.clone(),
                success: receipt.success,
                summary,
            })
            .with_key(hash),
        );
    })
}

/// Drops every recorded transaction on the active chain.
pub fn use_clear_all_transactions() -> Callback<()> {
    let mut store = use_app_store();
    let web3 = use_active_connection();
    use_callback(move |_: ()| {
        if let Some(chain_id) = web3.peek().chain_id {
            store.dispatch(TransactionAction::ClearAllTransactions { chain_id });
        }
    })
}
