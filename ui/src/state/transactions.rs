//! Transactions submitted from this front-end, tracked per chain.

use alloy_primitives::Address;
use alloy_primitives::ChainId;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub block_number: u64,
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub hash: String,
    pub from: Address,
    pub summary: Option<String>,
    /// Milliseconds since the unix epoch.
    pub added_time: u64,
    pub confirmed_time: Option<u64>,
    pub receipt: Option<TransactionReceipt>,
}

impl TransactionDetails {
    pub fn is_pending(&self) -> bool {
        self.receipt.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TransactionAction {
    AddTransaction {
        chain_id: ChainId,
        hash: String,
        from: Address,
        summary: Option<String>,
        added_time: u64,
    },
    FinalizeTransaction {
        chain_id: ChainId,
        hash: String,
        receipt: TransactionReceipt,
        confirmed_time: u64,
    },
    ClearAllTransactions {
        chain_id: ChainId,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionsState(HashMap<ChainId, HashMap<String, TransactionDetails>>);

impl TransactionsState {
    pub fn reduce(&mut self, action: TransactionAction) {
        match action {
            TransactionAction::AddTransaction {
                chain_id,
                hash,
                from,
                summary,
                added_time,
            } => {
                let txs = self.0.entry(chain_id).or_default();
                if txs.contains_key(&hash) {
                    warn!("ignoring duplicate transaction {hash} on chain {chain_id}");
                    return;
                }
                txs.insert(
                    hash.clone(),
                    TransactionDetails {
                        hash,
                        from,
                        summary,
                        added_time,
                        confirmed_time: None,
                        receipt: None,
                    },
                );
            }
            TransactionAction::FinalizeTransaction {
                chain_id,
                hash,
                receipt,
                confirmed_time,
            } => {
                if let Some(tx) = self.0.get_mut(&chain_id).and_then(|txs| txs.get_mut(&hash)) {
                    tx.receipt = Some(receipt);
                    tx.confirmed_time = Some(confirmed_time);
                }
            }
            TransactionAction::ClearAllTransactions { chain_id } => {
                self.0.remove(&chain_id);
            }
        }
    }

    pub fn get(&self, chain_id: ChainId, hash: &str) -> Option<&TransactionDetails> {
        self.0.get(&chain_id).and_then(|txs| txs.get(hash))
    }

    /// Hashes sent by `account` on `chain_id`, split into `(pending, confirmed)`,
    /// newest first.
    pub fn recent_transactions(
        &self,
        chain_id: Option<ChainId>,
        account: Option<Address>,
    ) -> (Vec<String>, Vec<String>) {
        let (Some(chain_id), Some(account)) = (chain_id, account) else {
            return (vec![], vec![]);
        };
        let Some(txs) = self.0.get(&chain_id) else {
            return (vec![], vec![]);
        };

        let mut sorted: Vec<&TransactionDetails> =
            txs.values().filter(|tx| tx.from == account).collect();
        sorted.sort_by(|a, b| b.added_time.cmp(&a.added_time).then_with(|| a.hash.cmp(&b.hash)));

        let (pending, confirmed): (Vec<_>, Vec<_>) =
            sorted.into_iter().partition(|tx| tx.is_pending());
        (
            pending.into_iter().map(|tx| tx.hash.clone()).collect(),
            confirmed.into_iter().map(|tx| tx.hash.clone()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ALICE: Address = address!("0x1111111111111111111111111111111111111111");
    const BOB: Address = address!("0x2222222222222222222222222222222222222222");

    fn add(state: &mut TransactionsState, chain_id: ChainId, hash: &str, from: Address, at: u64) {
        state.reduce(TransactionAction::AddTransaction {
            chain_id,
            hash: hash.to_string(),
            from,
            summary: Some(format!("tx {hash}")),
            added_time: at,
        });
    }

    #[test]
    fn split_pending_and_confirmed_newest_first() {
        let mut state = TransactionsState::default();
        add(&mut state, 137, "0x01", ALICE, 1);
        add(&mut state, 137, "0x02", ALICE, 2);
        add(&mut state, 137, "0x03", ALICE, 3);
        add(&mut state, 137, "0x04", BOB, 4);
        state.reduce(TransactionAction::FinalizeTransaction {
            chain_id: 137,
            hash: "0x02".to_string(),
            receipt: TransactionReceipt {
                block_number: 10,
                success: true,
            },
            confirmed_time: 5,
        });

        let (pending, confirmed) = state.recent_transactions(Some(137), Some(ALICE));
        assert_eq!(pending, vec!["0x03", "0x01"]);
        assert_eq!(confirmed, vec!["0x02"]);
    }

    #[test]
    fn duplicate_add_keeps_first_record() {
        let mut state = TransactionsState::default();
        add(&mut state, 1, "0xaa", ALICE, 1);
        add(&mut state, 1, "0xaa", BOB, 2);

        let tx = state.get(1, "0xaa").expect("stored");
        assert_eq!(tx.from, ALICE);
        assert_eq!(tx.added_time, 1);
    }

    #[test]
    fn clear_all_only_touches_one_chain() {
        let mut state = TransactionsState::default();
        add(&mut state, 1, "0xaa", ALICE, 1);
        add(&mut state, 137, "0xbb", ALICE, 1);

        state.reduce(TransactionAction::ClearAllTransactions { chain_id: 1 });

        assert_eq!(state.get(1, "0xaa"), None);
        assert!(state.get(137, "0xbb").is_some());
    }

    #[test]
    fn missing_chain_or_account_yields_nothing() {
        let mut state = TransactionsState::default();
        add(&mut state, 1, "0xaa", ALICE, 1);

        assert_eq!(state.recent_transactions(None, Some(ALICE)), (vec![], vec![]));
        assert_eq!(state.recent_transactions(Some(1), None), (vec![], vec![]));
    }
}
