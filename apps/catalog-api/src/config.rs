use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_list_or_default, server::ServerConfig,
};
use domain_items::RegistrationPolicy;

pub use core_config::Environment;

/// Item rules that vary per deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsConfig {
    /// Group codes subject to the aggregate price limit
    pub restricted_groups: Vec<String>,
}

impl ItemsConfig {
    pub fn policy(&self) -> RegistrationPolicy {
        RegistrationPolicy::new(self.restricted_groups.iter().cloned())
    }
}

impl FromEnv for ItemsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            restricted_groups: env_list_or_default("ITEM_RESTRICTED_GROUPS", "CD-A01"),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub items: ItemsConfig,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let items = ItemsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            items,
            cors_allowed_origins: env_list_or_default(
                "CORS_ALLOWED_ORIGIN",
                "http://localhost:3000",
            ),
        })
    }
}
