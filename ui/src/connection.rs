//! The active wallet connection as seen by the UI.

use crate::connectors::ConnectorKind;
use crate::explorer::parse_address;
use crate::explorer::AddressError;
use alloy_primitives::Address;
use alloy_primitives::ChainId;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveConnection {
    pub chain_id: Option<ChainId>,
    pub account: Option<Address>,
    pub connector: Option<ConnectorKind>,
}

impl ActiveConnection {
    /// A chain is selected but no wallet is attached.
    pub fn on_chain(chain_id: ChainId) -> Self {
        Self {
            chain_id: Some(chain_id),
            ..Default::default()
        }
    }

    /// A session reported by a connector. `account` is the raw address
    /// string the wallet handed back.
    pub fn connected(
        connector: ConnectorKind,
        account: &str,
        chain_id: ChainId,
    ) -> Result<Self, AddressError> {
        Ok(Self {
            chain_id: Some(chain_id),
            account: Some(parse_address(account)?),
            connector: Some(connector),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some() && self.connector.is_some()
    }
}

/// Context handle over the active connection.
///
/// The connector integration writes through [`Web3Handle::connect`]; the UI
/// reads with [`Web3Handle::get`] and may drop the session with
/// [`Web3Handle::disconnect`].
#[derive(Clone, Copy)]
pub struct Web3Handle {
    connection: Signal<ActiveConnection>,
}

impl Web3Handle {
    pub fn new(connection: Signal<ActiveConnection>) -> Self {
        Self { connection }
    }

    /// Subscribes the caller to connection changes.
    pub fn get(&self) -> ActiveConnection {
        *self.connection.read()
    }

    pub fn peek(&self) -> ActiveConnection {
        *self.connection.peek()
    }

    /// Entry point for an external connector integration. A malformed
    /// account leaves the current connection untouched.
    pub fn connect(
        &mut self,
        connector: ConnectorKind,
        account: &str,
        chain_id: ChainId,
    ) -> Result<(), AddressError> {
        let connection = ActiveConnection::connected(connector, account, chain_id)
            .inspect_err(|e| warn!("rejected {connector} session: {e}"))?;
        info!("connected {account} with {connector} on chain {chain_id}");
        self.connection.set(connection);
        Ok(())
    }

    /// Keeps the selected chain, drops account and connector.
    pub fn disconnect(&mut self) {
        let chain_id = self.connection.peek().chain_id;
        if let Some(connector) = self.connection.peek().connector {
            info!("disconnecting {connector}");
        }
        self.connection.set(ActiveConnection {
            chain_id,
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn connected_requires_account_and_connector() {
        let mut connection = ActiveConnection::on_chain(137);
        assert!(!connection.is_connected());

        connection.account = Some(address!("0x1111111111111111111111111111111111111111"));
        assert!(!connection.is_connected());

        connection.connector = Some(ConnectorKind::Injected);
        assert!(connection.is_connected());
    }

    #[test]
    fn connector_report_is_parsed_and_checked() {
        let connection = ActiveConnection::connected(
            ConnectorKind::WalletConnect,
            " 0xd8da6bf26964af9d7eed9e03e53415d37aa96045 ",
            1,
        )
        .expect("valid account");
        assert!(connection.is_connected());
        assert_eq!(
            connection.account,
            Some(address!("0xd8da6bf26964af9d7eed9e03e53415d37aa96045"))
        );
        assert_eq!(connection.chain_id, Some(1));

        assert_eq!(
            ActiveConnection::connected(ConnectorKind::Injected, "0x1234", 1),
            Err(AddressError::Invalid("0x1234".to_string()))
        );
    }
}
