//! Configuration validation.

use super::DbConf;
use crate::error::{DialectError, Result};

/// Validate the configuration.
pub fn validate(conf: &DbConf) -> Result<()> {
    if conf.driver.driver.trim().is_empty() {
        return Err(DialectError::Config(format!(
            "{}.driver is required",
            conf.env
        )));
    }
    if conf.driver.open.trim().is_empty() {
        return Err(DialectError::Config(format!("{}.open is required", conf.env)));
    }
    if let Some(dialect) = &conf.driver.dialect {
        if dialect.trim().is_empty() {
            return Err(DialectError::Config(format!(
                "{}.dialect must not be empty when set",
                conf.env
            )));
        }
    }
    if conf.driver.dialect_name().is_none() {
        return Err(DialectError::Config(format!(
            "{}: driver '{}' has no builtin dialect; set {}.dialect",
            conf.env, conf.driver.driver, conf.env
        )));
    }

    Ok(())
}

/// Expand `$VAR` and `${VAR}` references from the process environment.
///
/// Unset variables expand to the empty string.
pub fn expand_env_vars(input: &str) -> String {
    static ENV_VAR_REGEX: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();

    let regex = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("failed to compile env var regex")
    });

    regex
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            std::env::var(var_name).unwrap_or_default()
        })
        .into_owned()
}
