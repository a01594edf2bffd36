//! Connection cleanup run during graceful shutdown.

use tracing::{error, info};

/// Closes a SeaORM pool and logs the outcome.
///
/// The pool would also close on drop; closing explicitly makes the
/// shutdown sequence visible in the logs.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!(connection = name, "PostgreSQL connection closed"),
        Err(e) => error!(connection = name, "Error closing PostgreSQL connection: {}", e),
    }
}
