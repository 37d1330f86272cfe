//! Cache
//!
//! Este módulo contiene el acceso a Redis y las operaciones de cache.

pub mod cache_config;
pub mod redis_client;

pub use cache_config::CacheConfig;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Operaciones de cache sobre valores JSON
///
/// Los servicios dependen de este trait y no del cliente concreto.
#[async_trait::async_trait]
pub trait CacheOperations {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()>;
}
