use anyhow::Result;
use tracing::debug;

use crate::cache::CacheOperations;
use crate::dto::favourite_dto::Favourites;

/// Servicio de favoritos de visitantes anónimos
///
/// El set vive únicamente en Redis, bajo una clave derivada del source id que
/// genera el frontend. No lleva TTL: un favorito persiste hasta que el propio
/// visitante lo quita.
pub struct FavouritesService<C: CacheOperations> {
    cache: C,
}

fn favourites_key(source_id: &str) -> String {
    format!("favourites:{}", source_id)
}

impl<C: CacheOperations> FavouritesService<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Alterna un classified en el set del visitante y devuelve el set resultante
    pub async fn toggle(&self, source_id: &str, classified_id: i32) -> Result<Favourites> {
        let key = favourites_key(source_id);
        let mut favourites: Favourites = self.cache.get(&key).await?.unwrap_or_default();

        match favourites.ids.iter().position(|id| *id == classified_id) {
            Some(index) => {
                favourites.ids.remove(index);
                debug!("🗑️ Favorito {} quitado de {}", classified_id, key);
            }
            None => {
                favourites.ids.push(classified_id);
                debug!("💾 Favorito {} agregado a {}", classified_id, key);
            }
        }

        self.cache.set(&key, &favourites).await?;

        Ok(favourites)
    }

    /// Set actual del visitante; un visitante sin clave tiene el set vacío
    pub async fn list(&self, source_id: &str) -> Result<Favourites> {
        let favourites = self
            .cache
            .get(&favourites_key(source_id))
            .await?
            .unwrap_or_default();

        Ok(favourites)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use anyhow::bail;
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json::Value;

    use super::*;

    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, Value>>,
        fail_reads: bool,
    }

    #[async_trait::async_trait]
    impl CacheOperations for MemoryCache {
        async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
            if self.fail_reads {
                bail!("conexión a redis perdida");
            }
            let entries = self.entries.lock().unwrap();
            match entries.get(key) {
                Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
                None => Ok(None),
            }
        }

        async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
            let mut entries = self.entries.lock().unwrap();
            entries.insert(key.to_string(), serde_json::to_value(value)?);
            Ok(())
        }
    }

    const SOURCE: &str = "1b8458f4-0d23-4bf8-a66e-197722e0a3c2";

    #[test]
    fn test_key_is_scoped_by_source_id() {
        assert_eq!(favourites_key(SOURCE), format!("favourites:{}", SOURCE));
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let service = FavouritesService::new(MemoryCache::default());

        let favourites = service.toggle(SOURCE, 7).await.unwrap();
        assert_eq!(favourites.ids, vec![7]);

        let favourites = service.toggle(SOURCE, 12).await.unwrap();
        assert_eq!(favourites.ids, vec![7, 12]);

        let favourites = service.toggle(SOURCE, 7).await.unwrap();
        assert_eq!(favourites.ids, vec![12]);
    }

    #[tokio::test]
    async fn test_sets_are_independent_per_visitor() {
        let service = FavouritesService::new(MemoryCache::default());
        let other = "9c1d2a40-5a31-4f11-9d5c-8a3a4be0a111";

        service.toggle(SOURCE, 1).await.unwrap();
        service.toggle(other, 2).await.unwrap();

        assert_eq!(service.list(SOURCE).await.unwrap().ids, vec![1]);
        assert_eq!(service.list(other).await.unwrap().ids, vec![2]);
    }

    #[tokio::test]
    async fn test_unknown_visitor_has_empty_set() {
        let service = FavouritesService::new(MemoryCache::default());

        let favourites = service.list(SOURCE).await.unwrap();
        assert!(favourites.ids.is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_aborts_toggle_instead_of_wiping_the_set() {
        let cache = MemoryCache::default();
        cache
            .set(&favourites_key(SOURCE), &Favourites { ids: vec![3, 4] })
            .await
            .unwrap();

        let cache = MemoryCache {
            entries: Mutex::new(cache.entries.into_inner().unwrap()),
            fail_reads: true,
        };
        let service = FavouritesService::new(cache);

        assert!(service.toggle(SOURCE, 5).await.is_err());

        // El valor almacenado sigue intacto
        let stored = service.cache.entries.lock().unwrap();
        let favourites: Favourites =
            serde_json::from_value(stored[&favourites_key(SOURCE)].clone()).unwrap();
        assert_eq!(favourites.ids, vec![3, 4]);
    }
}
