pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod enrichment_config;
pub mod logging_config;
pub mod server_config;

use std::env;
use std::str::FromStr;

/// Parses `raw`, falling back to `default` when missing or malformed.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads and parses an environment variable, falling back to `default`.
pub(crate) fn env_or<T: FromStr>(name: &str, default: T) -> T {
    parse_or(env::var(name).ok(), default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_present_value() {
        assert_eq!(parse_or(Some(" 42 ".to_string()), 5u32), 42);
    }

    #[test]
    fn should_fall_back_when_missing_or_malformed() {
        assert_eq!(parse_or::<u32>(None, 5), 5);
        assert_eq!(parse_or(Some("many".to_string()), 5u32), 5);
    }
}
