// ⚙️ Server Configuration
// Built once at startup from CLI flags / environment, then shared read-only.

use crate::birth::KuaFormula;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Kua formula used when a request does not name one
    #[serde(default)]
    pub kua_formula: KuaFormula,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
            kua_formula: KuaFormula::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "0.0.0.0:8000");
        assert_eq!(config.kua_formula, KuaFormula::CenturyAware);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ServerConfig = serde_json::from_str(r#"{"kua_formula": "classic"}"#).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.kua_formula, KuaFormula::Classic);
    }
}
