pub mod config;
pub mod database;
pub mod logging;
pub mod postgres_repo;
pub mod random;
pub mod sqlite_repo;

mod listing;
