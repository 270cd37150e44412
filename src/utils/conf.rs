use anyhow::Result;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::model::Network;

pub const DEFAULT_CONFIG_FILE: &str = "gateway.ron";

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Conf {
    pub network: Network,
    /// Overrides the base url of `network` when set
    pub gateway_url: Option<String>,
    /// "full" or "json"
    pub log_format: String,
}

impl Conf {
    pub fn gateway_url(&self) -> &str {
        self.gateway_url
            .as_deref()
            .unwrap_or_else(|| self.network.gateway_url())
    }

    pub fn new(
        config_file: Option<String>,
        gateway_url: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config_file = config_file.unwrap_or(DEFAULT_CONFIG_FILE.to_string());
        let s = Config::builder()
            .set_default("network", "Mainnet")?
            .set_default("log_format", "full")?
            // Priority order: config file, then environment variables, then CLI
            .add_source(File::with_name(config_file.as_str()).required(false))
            .add_source(Environment::with_prefix("gateway"))
            .set_override_option("gateway_url", gateway_url)?
            .set_override_option("log_format", log_format)?
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let conf = Conf::new(Some("does-not-exist.ron".to_string()), None, None).unwrap();

        assert_eq!(conf.network, Network::Mainnet);
        assert_eq!(conf.gateway_url(), "https://mainnet.radixdlt.com");
        assert_eq!(conf.log_format, "full");
    }

    #[test]
    fn test_file_then_cli_override() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        writeln!(file, "(network: \"Stokenet\", log_format: \"json\")").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let conf = Conf::new(Some(path.clone()), None, None).unwrap();
        assert_eq!(conf.network, Network::Stokenet);
        assert_eq!(conf.gateway_url(), "https://stokenet.radixdlt.com");
        assert_eq!(conf.log_format, "json");

        let conf = Conf::new(
            Some(path),
            Some("http://localhost:4321".to_string()),
            Some("full".to_string()),
        )
        .unwrap();
        assert_eq!(conf.network, Network::Stokenet);
        assert_eq!(conf.gateway_url(), "http://localhost:4321");
        assert_eq!(conf.log_format, "full");
    }
}
