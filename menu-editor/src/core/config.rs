use std::time::Duration;

/// Application configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file in the
/// working directory is loaded first):
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | MENU_CURRENCY_SYMBOL | R | Prefix for rendered prices |
/// | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
/// | TICK_RATE_MS | 100 | Terminal event poll timeout (ms) |
///
/// # Example
///
/// ```ignore
/// MENU_CURRENCY_SYMBOL=$ LOG_DIR=/tmp/menu cargo run -p menu-editor
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Currency symbol placed before every price
    pub currency_symbol: String,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// Log file directory; file logging is off when unset
    pub log_dir: Option<String>,
    /// Event poll timeout (ms)
    pub tick_rate_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            currency_symbol: std::env::var("MENU_CURRENCY_SYMBOL").unwrap_or_else(|_| "R".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            tick_rate_ms: std::env::var("TICK_RATE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(100),
        }
    }

    /// Override the currency symbol on top of the environment
    ///
    /// Mostly used by tests.
    pub fn with_overrides(currency_symbol: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.currency_symbol = currency_symbol.into();
        config
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
