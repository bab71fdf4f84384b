/// Env var holding the output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "ERP_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `erp_catalog=debug,info`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `ERP_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = lookup(LOG_FORMAT_ENV)
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ObservabilityConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, ObservabilityConfig::default());
        assert_eq!(cfg.filter, "info");
        assert_eq!(cfg.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let cfg = ObservabilityConfig::from_lookup(lookup(&[
            ("RUST_LOG", "erp_catalog=debug"),
            ("ERP_LOG_FORMAT", "Pretty"),
        ]));
        assert_eq!(cfg.filter, "erp_catalog=debug");
        assert_eq!(cfg.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let cfg = ObservabilityConfig::from_lookup(lookup(&[("RUST_LOG", "  "), ("ERP_LOG_FORMAT", "xml")]));
        assert_eq!(cfg.filter, DEFAULT_FILTER);
        assert_eq!(cfg.format, LogFormat::Json);
    }
}
