pub mod adapters;
pub mod repository;
