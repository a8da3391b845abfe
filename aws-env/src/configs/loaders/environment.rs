use std::env::{self, VarError};

/// Like [`optional_env`], but a value that is not valid unicode is an error
/// instead of being reported as unset.
pub fn checked_env(env_name: &str) -> Result<Option<String>, String> {
    match env::var(env_name) {
        Ok(value) => Ok(Some(value).filter(|value| !value.is_empty())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(format!(
            "Environment variable '{env_name}' is not valid unicode: {value:?}"
        )),
    }
}

/// Reads `env_name`, treating an empty value the same as an unset one.
pub fn optional_env(env_name: &str) -> Option<String> {
    checked_env(env_name).ok().flatten()
}

pub fn env_or(env_name: &str, default: &str) -> String {
    optional_env(env_name).unwrap_or_else(|| default.to_string())
}
