use crate::modules::vehicle::{price::PriceLocale, validation::PlateRule};
use serde::Deserialize;
use std::sync::OnceLock;

fn def_http_port() -> u16 {
    3000
}

fn def_is_development() -> bool {
    false
}

fn def_plate_rule() -> PlateRule {
    PlateRule::CountryFormat
}

fn def_price_locale() -> PriceLocale {
    PriceLocale::European
}

fn def_log_filter() -> String {
    String::from("info")
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// if the application is running in `development` mode
    #[serde(default = "def_is_development")]
    pub is_development: bool,

    /// http port the api will listen for requests on
    #[serde(default = "def_http_port")]
    pub http_port: u16,

    /// how plates are checked when validating vehicle forms, `country` or `length`
    #[serde(default = "def_plate_rule")]
    pub plate_rule: PlateRule,

    /// decimal and grouping separators used to parse prices, `european` or `english`
    #[serde(default = "def_price_locale")]
    pub price_locale: PriceLocale,

    /// tracing filter used when `RUST_LOG` is not set
    #[serde(default = "def_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            is_development: def_is_development(),
            http_port: def_http_port(),
            plate_rule: def_plate_rule(),
            price_locale: def_price_locale(),
            log_filter: def_log_filter(),
        }
    }
}

impl AppConfig {
    /// loads the config from the environment variables
    ///
    /// # PANICS
    /// panics if the environment variables could not be loaded, such as when a string value
    /// cannot be parsed to the desired data type, eg:
    ///
    /// PLATE_RULE=not_a_rule
    pub fn from_env() -> AppConfig {
        match envy::from_env::<AppConfig>() {
            Ok(config) => config,
            Err(error) => {
                panic!("[CFG] failed to load application config, {:#?}", error)
            }
        }
    }
}

/// returns a global read only reference to the app configuration
pub fn app_config() -> &'static AppConfig {
    static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
    INSTANCE.get_or_init(AppConfig::from_env)
}
