use std::fmt;

use crate::storage::repository::StoreError;

#[derive(Debug)]
pub enum AwsEnvError {
    InvalidFormat(String),
    Connect(anyhow::Error),
    Store(StoreError),
    Output(std::io::Error),
}

impl fmt::Display for AwsEnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "{}", msg),
            Self::Connect(err) => write!(f, "Failed to create parameter store client: {:#}", err),
            Self::Store(err) => write!(f, "Parameter store request failed: {}", err),
            Self::Output(err) => write!(f, "Failed to write output: {}", err),
        }
    }
}

impl std::error::Error for AwsEnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(_) => None,
            Self::Connect(err) => Some(&**err),
            Self::Store(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<StoreError> for AwsEnvError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<std::io::Error> for AwsEnvError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err)
    }
}
