mod cache_store;
mod errors;
mod types;

pub(crate) use cache_store::{CacheStore, InMemoryCacheStore, cache_store_from_env};
pub use errors::StorageError;
pub(crate) use types::CacheData;
