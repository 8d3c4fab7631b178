use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

use crate::storage::errors::StorageError;
use crate::storage::types::CacheData;

use super::types::{CacheStore, RedisCacheStore};

/// Shared with the in-memory store's key layout.
const KEY_NAMESPACE: &str = "cache";

impl RedisCacheStore {
    fn make_key(prefix: &str, key: &str) -> String {
        format!("{KEY_NAMESPACE}:{prefix}:{key}")
    }

    async fn conn(&self) -> Result<MultiplexedConnection, StorageError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn init(&self) -> Result<(), StorageError> {
        let mut conn = self.conn().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    async fn put_with_ttl(
        &mut self,
        prefix: &str,
        key: &str,
        value: CacheData,
        ttl: usize,
    ) -> Result<(), StorageError> {
        let key = Self::make_key(prefix, key);
        let mut conn = self.conn().await?;

        // SETEX rejects a zero expiry; a record that is already expired is simply absent
        if ttl == 0 {
            let _: () = conn.del(&key).await?;
            return Ok(());
        }

        let payload = serde_json::to_string(&value)?;
        let _: () = conn.set_ex(&key, payload, ttl as u64).await?;
        Ok(())
    }

    async fn get(&self, prefix: &str, key: &str) -> Result<Option<CacheData>, StorageError> {
        let mut conn = self.conn().await?;
        let payload: Option<String> = conn.get(Self::make_key(prefix, key)).await?;
        Ok(payload
            .map(|payload| serde_json::from_str(&payload))
            .transpose()?)
    }

    async fn remove(&mut self, prefix: &str, key: &str) -> Result<(), StorageError> {
        let mut conn = self.conn().await?;
        let _: () = conn.del(Self::make_key(prefix, key)).await?;
        Ok(())
    }
}
