use alloy_primitives::ChainId;
use std::env;

/// Polygon mainnet.
const DEFAULT_CHAIN_ID: ChainId = 137;
const DEFAULT_POPUP_TIMEOUT_MS: u64 = 15_000;

/// Front-end preferences, read once at startup.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct UiPrefs {
    default_chain_id: ChainId,
    /// Applied to popups added without an explicit timeout. `None` keeps
    /// them on screen until dismissed.
    popup_timeout_ms: Option<u64>,
}

impl UiPrefs {
    /// Builds prefs from environment variables, falling back to in-code
    /// defaults for anything unset or unparsable.
    ///
    /// # Environment Variables
    /// - `DEX_DEFAULT_CHAIN_ID`: numeric chain id. defaults to 137.
    /// - `DEX_POPUP_TIMEOUT_MS`: milliseconds, or `0` / `never` to disable
    ///   auto-hide. defaults to 15000.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("DEX_DEFAULT_CHAIN_ID").ok().as_deref(),
            env::var("DEX_POPUP_TIMEOUT_MS").ok().as_deref(),
        )
    }

    fn from_vars(chain_id: Option<&str>, popup_timeout: Option<&str>) -> Self {
        let default_chain_id = chain_id
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_CHAIN_ID);

        let popup_timeout_ms = match popup_timeout.map(str::trim) {
            Some(val) if val.eq_ignore_ascii_case("never") => None,
            Some(val) => match val.parse::<u64>() {
                Ok(0) => None,
                Ok(ms) => Some(ms),
                Err(_) => Some(DEFAULT_POPUP_TIMEOUT_MS),
            },
            None => Some(DEFAULT_POPUP_TIMEOUT_MS),
        };

        Self {
            default_chain_id,
            popup_timeout_ms,
        }
    }

    pub fn default_chain_id(&self) -> ChainId {
        self.default_chain_id
    }

    pub fn popup_timeout_ms(&self) -> Option<u64> {
        self.popup_timeout_ms
    }
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let prefs = UiPrefs::default();
        assert_eq!(prefs.default_chain_id(), 137);
        assert_eq!(prefs.popup_timeout_ms(), Some(15_000));
    }

    #[test]
    fn parses_overrides() {
        let prefs = UiPrefs::from_vars(Some(" 1 "), Some("3000"));
        assert_eq!(prefs.default_chain_id(), 1);
        assert_eq!(prefs.popup_timeout_ms(), Some(3000));
    }

    #[test]
    fn never_and_zero_disable_auto_hide() {
        assert_eq!(UiPrefs::from_vars(None, Some("NEVER")).popup_timeout_ms(), None);
        assert_eq!(UiPrefs::from_vars(None, Some("0")).popup_timeout_ms(), None);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let prefs = UiPrefs::from_vars(Some("polygon"), Some("soon"));
        assert_eq!(prefs, UiPrefs::default());
    }
}
