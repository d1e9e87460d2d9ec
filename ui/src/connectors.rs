//! The wallet connectors this front-end knows how to talk to, and the table
//! of wallets offered in the wallet picker.

use serde::Deserialize;
use serde::Serialize;

/// How a wallet connection was established.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum ConnectorKind {
    /// A provider injected into the page by a browser extension.
    Injected,
    WalletLink,
    WalletConnect,
    Fortmatic,
    Portis,
    Arkane,
    /// Running inside a Gnosis Safe app frame.
    SafeApp,
}

/// Connectors the account panel offers no "Disconnect" control for.
const NO_DISCONNECT: [ConnectorKind; 3] = [
    ConnectorKind::Injected,
    ConnectorKind::WalletLink,
    ConnectorKind::SafeApp,
];

/// Connectors the account panel offers no "Change" control for.
const NO_CHANGE: [ConnectorKind; 1] = [ConnectorKind::SafeApp];

impl ConnectorKind {
    pub fn supports_disconnect(self) -> bool {
        !NO_DISCONNECT.contains(&self)
    }

    pub fn supports_change(self) -> bool {
        !NO_CHANGE.contains(&self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportedWallet {
    pub key: &'static str,
    pub connector: ConnectorKind,
    pub name: &'static str,
    pub description: &'static str,
    pub mobile_only: bool,
}

const METAMASK_KEY: &str = "METAMASK";

/// Ordered; the first matching entry names the connection.
pub const SUPPORTED_WALLETS: &[SupportedWallet] = &[
    SupportedWallet {
        key: "INJECTED",
        connector: ConnectorKind::Injected,
        name: "Injected",
        description: "Injected web3 provider.",
        mobile_only: false,
    },
    SupportedWallet {
        key: METAMASK_KEY,
        connector: ConnectorKind::Injected,
        name: "MetaMask",
        description: "Easy-to-use browser extension.",
        mobile_only: false,
    },
    SupportedWallet {
        key: "SAFE_APP",
        connector: ConnectorKind::SafeApp,
        name: "Gnosis Safe App",
        description: "Login using gnosis safe app",
        mobile_only: false,
    },
    SupportedWallet {
        key: "WALLET_LINK",
        connector: ConnectorKind::WalletLink,
        name: "Coinbase Wallet",
        description: "Use Coinbase Wallet app on mobile device",
        mobile_only: false,
    },
    SupportedWallet {
        key: "COINBASE_LINK",
        connector: ConnectorKind::WalletLink,
        name: "Open in Coinbase Wallet",
        description: "Open in Coinbase Wallet app.",
        mobile_only: true,
    },
    SupportedWallet {
        key: "WALLET_CONNECT",
        connector: ConnectorKind::WalletConnect,
        name: "WalletConnect",
        description: "Connect to Trust Wallet, Rainbow Wallet and more...",
        mobile_only: false,
    },
    SupportedWallet {
        key: "FORTMATIC",
        connector: ConnectorKind::Fortmatic,
        name: "Fortmatic",
        description: "Login using Fortmatic hosted wallet",
        mobile_only: false,
    },
    SupportedWallet {
        key: "PORTIS",
        connector: ConnectorKind::Portis,
        name: "Portis",
        description: "Login using Portis hosted wallet",
        mobile_only: false,
    },
    SupportedWallet {
        key: "ARKANE",
        connector: ConnectorKind::Arkane,
        name: "Venly",
        description: "Login using Venly hosted wallet",
        mobile_only: false,
    },
];

/// Name of the wallet behind `connector`.
///
/// The injected connector is shared by every browser extension, so the
/// `METAMASK` entry only matches when the injected provider says it is
/// MetaMask, and the other injected entries only match when it does not.
pub fn connector_display_name(
    connector: ConnectorKind,
    injected_is_metamask: bool,
) -> Option<&'static str> {
    SUPPORTED_WALLETS
        .iter()
        .find(|wallet| {
            wallet.connector == connector
                && (connector != ConnectorKind::Injected
                    || injected_is_metamask == (wallet.key == METAMASK_KEY))
        })
        .map(|wallet| wallet.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_resolves_by_provider_identity() {
        assert_eq!(
            connector_display_name(ConnectorKind::Injected, true),
            Some("MetaMask")
        );
        assert_eq!(
            connector_display_name(ConnectorKind::Injected, false),
            Some("Injected")
        );
    }

    #[test]
    fn other_connectors_ignore_provider_identity() {
        for is_metamask in [true, false] {
            assert_eq!(
                connector_display_name(ConnectorKind::WalletLink, is_metamask),
                Some("Coinbase Wallet")
            );
            assert_eq!(
                connector_display_name(ConnectorKind::SafeApp, is_metamask),
                Some("Gnosis Safe App")
            );
        }
    }

    #[test]
    fn every_connector_has_a_name() {
        for wallet in SUPPORTED_WALLETS {
            assert!(connector_display_name(wallet.connector, false).is_some());
        }
    }

    #[test]
    fn suppression_table_is_literal() {
        let no_disconnect: Vec<_> = SUPPORTED_WALLETS
            .iter()
            .map(|w| w.connector)
            .filter(|c| !c.supports_disconnect())
            .collect();
        assert!(no_disconnect
            .iter()
            .all(|c| matches!(c, ConnectorKind::Injected | ConnectorKind::WalletLink | ConnectorKind::SafeApp)));

        assert!(!ConnectorKind::Injected.supports_disconnect());
        assert!(!ConnectorKind::WalletLink.supports_disconnect());
        assert!(!ConnectorKind::SafeApp.supports_disconnect());
        assert!(ConnectorKind::WalletConnect.supports_disconnect());
        assert!(ConnectorKind::Fortmatic.supports_disconnect());
        assert!(ConnectorKind::Portis.supports_disconnect());
        assert!(ConnectorKind::Arkane.supports_disconnect());
        assert!(!ConnectorKind::SafeApp.supports_change());
        assert!(ConnectorKind::Injected.supports_change());
        assert!(ConnectorKind::WalletLink.supports_change());
    }
}
