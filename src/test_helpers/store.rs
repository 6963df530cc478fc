use std::sync::Arc;

use crate::persistence::SqliteAbiStore;

/// Creates a migrated in-memory ABI cache.
pub async fn create_test_store() -> Arc<SqliteAbiStore> {
    let store = SqliteAbiStore::new("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");
    store.run_migrations().await.expect("Failed to run migrations");
    Arc::new(store)
}
