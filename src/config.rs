use crate::error::ConfigError;
use wasm_bindgen::JsValue;

pub const DEFAULT_NAMESPACE: &str = "cardano";

/// Options accepted by the browser element.
///
/// From javascript every field is optional:
///
/// ```js
/// new CardanoWalletButton(host, { namespace: "cardano", logLevel: "debug" });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// name of the global object the wallets are injected in
    pub namespace: String,
    /// most verbose level forwarded to the browser console
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Decode the options object given to the element. `undefined` and
    /// `null` give the default configuration.
    pub fn from_js(options: JsValue) -> Result<Self, ConfigError> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }

        let config: Self = serde_wasm_bindgen::from_value(options)
            .map_err(|error| ConfigError::Invalid(error.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::Invalid("empty namespace".to_owned()));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults() {
        let config = serde_json::from_value::<Config>(json! { {} }).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.namespace, "cardano");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn overrides() {
        let config = serde_json::from_value::<Config>(json! { {
            "namespace": "cardanoTestnet",
            "logLevel": "debug",
        }})
        .unwrap()
        .validate()
        .unwrap();

        assert_eq!(
            config,
            Config {
                namespace: "cardanoTestnet".to_owned(),
                log_level: LogLevel::Debug,
            }
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_json::from_value::<Config>(json! { { "wallets": ["nami"] } }).is_err());
        assert!(serde_json::from_value::<Config>(json! { { "logLevel": "verbose" } }).is_err());
    }

    #[test]
    fn rejects_empty_namespace() {
        let config = serde_json::from_value::<Config>(json! { { "namespace": " " } }).unwrap();

        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Invalid("empty namespace".to_owned())
        );
    }

    #[test]
    fn log_levels() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert!(tracing::Level::from(LogLevel::Trace) > tracing::Level::from(LogLevel::Error));
    }
}
