//! Unit tests for database connection pool

use fm_shared::config::DatabaseConfig;

use crate::database::connection::{DatabasePool, PoolStatistics};

#[tokio::test]
async fn test_pool_creation_with_invalid_url() {
    let config = DatabaseConfig::new("invalid://url");

    let result = DatabasePool::new(config).await;
    assert!(matches!(result, Err(crate::InfrastructureError::Config(_))));
}

#[test]
fn test_pool_statistics_display() {
    let stats = PoolStatistics {
        connections: 5,
        idle_connections: 3,
        max_connections: 10,
    };

    let display = format!("{}", stats);
    assert!(display.contains("5/10"));
    assert!(display.contains("3 idle"));
}
