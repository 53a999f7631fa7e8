use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::delivery::DeliveryOptions;

/// Main bot configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Address of the published meal plan page
    pub page_url: Option<String>,
    /// Group the plan is posted to; nothing is sent when unset
    pub target_group_id: Option<String>,
    /// Fallback contact for failure reports; failures are only logged when unset
    pub error_contact: Option<String>,
    /// Keep the numeric additive/allergen codes in descriptions
    #[serde(default)]
    pub show_allergies: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Messaging gateway settings
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            page_url: None,
            target_group_id: None,
            error_contact: None,
            show_allergies: false,
            timeout: default_timeout(),
            delivery: DeliveryConfig::default(),
        }
    }
}

/// Configuration for the outbound messaging gateway
#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    /// Base URL of the HTTP messaging gateway. Without it messages go to stdout.
    pub gateway_url: Option<String>,
    /// Bearer token for the gateway
    pub api_token: Option<String>,
    /// Seconds to wait before sending the meal plan
    #[serde(default)]
    pub delay_seconds: u64,
    /// Close the gateway connection after the meal plan is sent
    #[serde(default)]
    pub close_after_send: bool,
    /// Seconds to wait before the single retry of a failed send
    #[serde(default = "default_retry_wait_seconds")]
    pub retry_wait_seconds: u64,
    /// Seconds to wait before sending a failure report
    #[serde(default = "default_error_delay_seconds")]
    pub error_delay_seconds: u64,
    /// Close the gateway connection after a failure report is sent
    #[serde(default = "default_error_close_after_send")]
    pub error_close_after_send: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            gateway_url: None,
            api_token: None,
            delay_seconds: 0,
            close_after_send: false,
            retry_wait_seconds: default_retry_wait_seconds(),
            error_delay_seconds: default_error_delay_seconds(),
            error_close_after_send: default_error_close_after_send(),
        }
    }
}

impl DeliveryConfig {
    /// Send options for the meal plan message
    pub fn plan_options(&self) -> DeliveryOptions {
        DeliveryOptions {
            delay: Duration::from_secs(self.delay_seconds),
            close_after_send: self.close_after_send,
            retry_wait: Duration::from_secs(self.retry_wait_seconds),
        }
    }

    /// Send options for failure reports
    pub fn error_options(&self) -> DeliveryOptions {
        DeliveryOptions {
            delay: Duration::from_secs(self.error_delay_seconds),
            close_after_send: self.error_close_after_send,
            retry_wait: Duration::from_secs(self.retry_wait_seconds),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_retry_wait_seconds() -> u64 {
    2
}

fn default_error_delay_seconds() -> u64 {
    5
}

fn default_error_close_after_send() -> bool {
    true
}

/// Prefix of the crate's own environment settings, e.g. `MEALPLAN__TIMEOUT`
const ENV_PREFIX: &str = "MEALPLAN";

impl BotConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. `PAGE_URL`, `TARGET_GROUP_ID` and `ERROR_CONTACT`
    /// 2. Environment variables with MEALPLAN__ prefix
    /// 3. config.toml file in current directory
    /// 4. Default values
    ///
    /// Nested keys use a double underscore: `MEALPLAN__DELIVERY__GATEWAY_URL`
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Just enough configuration to report a failure when [`BotConfig::load`] fails.
    ///
    /// Reads the error contact and gateway straight from the environment.
    pub fn fallback_from_env() -> Self {
        let prefixed = |key: &str| env::var(format!("{ENV_PREFIX}__DELIVERY__{key}")).ok();
        Self {
            error_contact: env::var("ERROR_CONTACT").ok(),
            delivery: DeliveryConfig {
                gateway_url: prefixed("GATEWAY_URL"),
                api_token: prefixed("API_TOKEN"),
                ..DeliveryConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`BotConfig::load`] for the source priority.
pub fn load_config() -> Result<BotConfig, ConfigError> {
    // Non-unicode variables cannot hold any of our settings
    let vars = env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    config_from_env(vars)
}

fn config_from_env(vars: Map<String, String>) -> Result<BotConfig, ConfigError> {
    let flat = |name: &str| vars.get(name).cloned();

    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // No try_parsing: phone numbers like "+49..." must stay strings
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(Some(vars.clone())),
        )
        .set_override_option("page_url", flat("PAGE_URL"))?
        .set_override_option("target_group_id", flat("TARGET_GROUP_ID"))?
        .set_override_option("error_contact", flat("ERROR_CONTACT"))?
        .build()?;

    settings.try_deserialize()
}
