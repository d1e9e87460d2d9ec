use crate::compat;
use crate::connection::ActiveConnection;
use crate::connection::Web3Handle;
use dioxus::prelude::*;

/// Provides the connection context to the current component and its descendants.
pub fn use_web3_provider(initial: ActiveConnection) -> Web3Handle {
    let connection = use_signal(|| initial);
    use_context_provider(|| Web3Handle::new(connection))
}

pub fn use_active_connection() -> Web3Handle {
    use_context::<Web3Handle>()
}

/// Probes the injected provider once per component instance.
pub fn use_injected_is_metamask() -> bool {
    use_hook(compat::injected_is_metamask)
}
