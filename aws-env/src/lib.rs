pub mod cli;
pub mod configs;
pub mod domain;
pub mod error;
pub mod exporter;
pub mod naming;
pub mod output;
pub mod storage;

pub use error::AwsEnvError;
