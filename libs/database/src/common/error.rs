/// Database error type for connection management and health probing.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by SeaORM
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection could not be established after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health probe failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
