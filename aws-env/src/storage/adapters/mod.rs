pub mod local_storage;
pub mod ssm_storage;
