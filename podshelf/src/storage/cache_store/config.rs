use std::env;

use crate::storage::errors::StorageError;

use super::types::{CacheStore, InMemoryCacheStore, RedisCacheStore};

/// Builds the session cache store selected by `SESSION_STORE_TYPE`.
///
/// `memory` (the default) keeps everything in process. `redis` connects to
/// `SESSION_STORE_URL` and verifies the connection before returning.
pub(crate) async fn cache_store_from_env() -> Result<Box<dyn CacheStore>, StorageError> {
    let store_type = env::var("SESSION_STORE_TYPE").unwrap_or_else(|_| "memory".to_string());
    let store_url =
        env::var("SESSION_STORE_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

    tracing::info!("Initializing session store with type: {}", store_type);

    let store: Box<dyn CacheStore> = match store_type.to_lowercase().as_str() {
        "memory" => Box::new(InMemoryCacheStore::new()),
        "redis" => {
            let client = redis::Client::open(store_url.as_str())?;
            let store = RedisCacheStore { client };
            store.init().await?;
            tracing::info!("Connected to redis session store");
            Box::new(store)
        }
        t => {
            return Err(StorageError::Config(format!(
                "Unsupported session store type: {t}. Supported types are 'memory' and 'redis'"
            )));
        }
    };

    Ok(store)
}
