use serde::{Deserialize, Serialize};

/// Runtime tunables of the dashboard.
///
/// Missing fields fall back to [`DashboardConfig::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Block explorer origin, without trailing slash
    pub explorer_base_url: String,
    /// How long the wallet dialog keeps the "Copied!" state
    pub copy_feedback_ms: u32,
    /// Auto-dismiss delay for toasts
    pub toast_duration_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            explorer_base_url: "https://subnets.avax.network".to_string(),
            copy_feedback_ms: 2000,
            toast_duration_ms: 4000,
        }
    }
}

impl DashboardConfig {
    /// Explorer page for a wallet address. The address is inserted verbatim.
    pub fn explorer_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_base_url, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_url() {
        let cfg = DashboardConfig::default();
        assert_eq!(
            cfg.explorer_url("0x4a7B2c9f8D1e3A5F7C9B2E4A6D8F1A3C5E7B9D2F"),
            "https://subnets.avax.network/address/0x4a7B2c9f8D1e3A5F7C9B2E4A6D8F1A3C5E7B9D2F"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: DashboardConfig =
            serde_json::from_str(r#"{ "copy_feedback_ms": 500 }"#).unwrap();
        assert_eq!(cfg.copy_feedback_ms, 500);
        assert_eq!(cfg.toast_duration_ms, 4000);
        assert_eq!(cfg.explorer_base_url, "https://subnets.avax.network");
    }
}
