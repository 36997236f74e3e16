pub mod config;
pub mod lake;
pub mod query;
