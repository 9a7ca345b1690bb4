/// Quote driver configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | default log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | write logs to a daily rolling file in this directory |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
        }
    }
}
