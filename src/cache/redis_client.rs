use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use super::{CacheConfig, CacheOperations};

/// Cliente Redis con connection manager y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: CacheConfig) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self { manager })
    }
}

#[async_trait::async_trait]
impl CacheOperations for RedisClient {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        let mut conn = self.manager.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                log::debug!("📥 Cache HIT para clave: {}", key);
                let deserialized: T = serde_json::from_str(&value)?;
                Ok(Some(deserialized))
            }
            Ok(None) => {
                log::debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
            Err(e) => {
                // Los favoritos viven solo en Redis: un error de lectura
                // no puede tratarse como un miss o un toggle borraría el set
                log::error!("❌ Error leyendo cache para clave {}: {}", key, e);
                Err(anyhow::anyhow!("Error de Redis: {}", e))
            }
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let mut conn = self.manager.clone();

        let serialized = serde_json::to_string(value)?;

        let result: RedisResult<()> = conn.set(key, serialized).await;

        match result {
            Ok(()) => {
                log::debug!("💾 Cache SET para clave: {}", key);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error guardando en cache para clave {}: {}", key, e);
                Err(anyhow::anyhow!("Error de Redis: {}", e))
            }
        }
    }
}
