pub mod loaders;
pub mod storage;

pub use storage::SsmStoreConfig;

use loaders::environment::checked_env;

pub const ENV_PATH_VAR: &str = "AWS_ENV_PATH";

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

/// Resolved once at startup and passed down; nothing below `main` reads the
/// process environment again.
#[derive(Debug, Clone)]
pub struct AwsEnvConfig {
    /// Parameter Store path to export. `None` disables the run entirely.
    pub env_path: Option<String>,
    pub store_config: SsmStoreConfig,
}

impl AwsEnvConfig {
    pub fn new(env_path: Option<String>, store_config: SsmStoreConfig) -> Self {
        Self {
            env_path: env_path.filter(|path| !path.is_empty()),
            store_config,
        }
    }
}

#[async_trait::async_trait]
impl Configs for AwsEnvConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self::new(
            checked_env(ENV_PATH_VAR)?,
            SsmStoreConfig::load().await?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_empty_path_disables_run() {
        let config = AwsEnvConfig::new(Some(String::new()), SsmStoreConfig::default());
        assert!(config.env_path.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_load_reads_env_path() {
        unsafe {
            std::env::set_var(ENV_PATH_VAR, "/app/prod/");
        }

        let config = AwsEnvConfig::load().await.unwrap();
        assert_eq!(config.env_path.as_deref(), Some("/app/prod/"));

        unsafe {
            std::env::remove_var(ENV_PATH_VAR);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    #[serial]
    async fn test_load_fails_on_non_unicode_path() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};

        unsafe {
            std::env::set_var(ENV_PATH_VAR, OsString::from_vec(vec![b'/', 0xfe]));
        }

        let err = AwsEnvConfig::load().await.unwrap_err();
        assert!(err.to_string().contains(ENV_PATH_VAR));

        unsafe {
            std::env::remove_var(ENV_PATH_VAR);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_without_env_path() {
        unsafe {
            std::env::remove_var(ENV_PATH_VAR);
        }

        let config = AwsEnvConfig::load().await.unwrap();
        assert!(config.env_path.is_none());
    }
}
