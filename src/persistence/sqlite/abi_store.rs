//! Implementation of the AbiStore trait for SqliteAbiStore

use alloy::primitives::Address;
use async_trait::async_trait;

use super::abi_sql;
use crate::persistence::{error::PersistenceError, sqlite::SqliteAbiStore, traits::AbiStore};

#[async_trait]
impl AbiStore for SqliteAbiStore {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn get_abi(&self, contract: Address) -> Result<Option<String>, PersistenceError> {
        let key = contract.to_checksum(None);
        tracing::debug!(contract = %key, "Looking up cached ABI.");

        let abi: Option<String> = self
            .execute_query_with_error_handling(
                "get abi",
                sqlx::query_scalar(abi_sql::SELECT_ABI).bind(&key).fetch_optional(&self.pool),
            )
            .await?;

        tracing::debug!(contract = %key, hit = abi.is_some(), "Cached ABI lookup finished.");
        Ok(abi)
    }

    #[tracing::instrument(skip(self, abi), level = "debug")]
    async fn store_abi(&self, contract: Address, abi: &str) -> Result<(), PersistenceError> {
        let key = contract.to_checksum(None);
        tracing::debug!(contract = %key, "Storing ABI.");

        self.execute_query_with_error_handling(
            "store abi",
            sqlx::query(abi_sql::UPSERT_ABI).bind(&key).bind(abi).execute(&self.pool),
        )
        .await?;

        Ok(())
    }
}
