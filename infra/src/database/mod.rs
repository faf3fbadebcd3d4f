//! Database connection management and MySQL repository implementations

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
