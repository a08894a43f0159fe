use crate::model::{BikeType, Brand, Id, Model};
use crate::store::traits::{BikeTypeStore, BrandStore, CatalogStore, ModelFilter, ModelStore};
use anyhow::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory catalog store. The default backend when no database is
/// configured, and the substrate for unit tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    brands: RwLock<HashMap<Id, Brand>>,
    biketypes: RwLock<HashMap<Id, BikeType>>,
    models: RwLock<HashMap<Id, Model>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BrandStore for MemoryStore {
    async fn get_brand(&self, id: &Id) -> Result<Option<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands.get(id).cloned())
    }

    async fn list_brands(&self) -> Result<Vec<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands.values().cloned().collect())
    }

    async fn insert_brand(&self, brand: Brand) -> Result<()> {
        let mut brands = self.brands.write().await;
        brands.insert(brand.id.clone(), brand);
        Ok(())
    }

    async fn replace_brand(&self, brand: Brand) -> Result<bool> {
        let mut brands = self.brands.write().await;
        if !brands.contains_key(&brand.id) {
            return Ok(false);
        }
        brands.insert(brand.id.clone(), brand);
        Ok(true)
    }

    async fn delete_brand(&self, id: &Id) -> Result<bool> {
        let mut brands = self.brands.write().await;
        Ok(brands.remove(id).is_some())
    }

    async fn count_brands(&self) -> Result<usize> {
        let brands = self.brands.read().await;
        Ok(brands.len())
    }
}

#[async_trait::async_trait]
impl BikeTypeStore for MemoryStore {
    async fn get_biketype(&self, id: &Id) -> Result<Option<BikeType>> {
        let biketypes = self.biketypes.read().await;
        Ok(biketypes.get(id).cloned())
    }

    async fn find_biketype_by_name(&self, name: &str) -> Result<Option<BikeType>> {
        let biketypes = self.biketypes.read().await;
        Ok(biketypes.values().find(|t| t.name == name).cloned())
    }

    async fn list_biketypes(&self) -> Result<Vec<BikeType>> {
        let biketypes = self.biketypes.read().await;
        Ok(biketypes.values().cloned().collect())
    }

    async fn insert_biketype(&self, biketype: BikeType) -> Result<()> {
        let mut biketypes = self.biketypes.write().await;
        biketypes.insert(biketype.id.clone(), biketype);
        Ok(())
    }

    async fn replace_biketype(&self, biketype: BikeType) -> Result<bool> {
        let mut biketypes = self.biketypes.write().await;
        if !biketypes.contains_key(&biketype.id) {
            return Ok(false);
        }
        biketypes.insert(biketype.id.clone(), biketype);
        Ok(true)
    }

    async fn delete_biketype(&self, id: &Id) -> Result<bool> {
        let mut biketypes = self.biketypes.write().await;
        Ok(biketypes.remove(id).is_some())
    }

    async fn count_biketypes(&self) -> Result<usize> {
        let biketypes = self.biketypes.read().await;
        Ok(biketypes.len())
    }
}

#[async_trait::async_trait]
impl ModelStore for MemoryStore {
    async fn get_model(&self, id: &Id) -> Result<Option<Model>> {
        let models = self.models.read().await;
        Ok(models.get(id).cloned())
    }

    async fn list_models(&self) -> Result<Vec<Model>> {
        let models = self.models.read().await;
        Ok(models.values().cloned().collect())
    }

    async fn find_models(&self, filter: &ModelFilter) -> Result<Vec<Model>> {
        let models = self.models.read().await;
        let matching = models
            .values()
            .filter(|model| match filter {
                ModelFilter::ByBrand(brand_id) => &model.brand == brand_id,
                ModelFilter::ByBikeType(type_id) => model.biketype.contains(type_id),
            })
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn insert_model(&self, model: Model) -> Result<()> {
        let mut models = self.models.write().await;
        models.insert(model.id.clone(), model);
        Ok(())
    }

    async fn replace_model(&self, model: Model) -> Result<bool> {
        let mut models = self.models.write().await;
        if !models.contains_key(&model.id) {
            return Ok(false);
        }
        models.insert(model.id.clone(), model);
        Ok(true)
    }

    async fn delete_model(&self, id: &Id) -> Result<bool> {
        let mut models = self.models.write().await;
        Ok(models.remove(id).is_some())
    }

    async fn count_models(&self) -> Result<usize> {
        let models = self.models.read().await;
        Ok(models.len())
    }
}

impl CatalogStore for MemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewBikeType, NewBrand, NewModel};

    fn brand(name: &str) -> Brand {
        NewBrand {
            brand_name: name.to_string(),
            founding_date: None,
        }
        .into_brand()
    }

    fn biketype(name: &str) -> BikeType {
        NewBikeType {
            name: name.to_string(),
        }
        .into_biketype()
    }

    fn model(name: &str, brand: &Brand, biketypes: &[&BikeType]) -> Model {
        NewModel {
            model_name: name.to_string(),
            brand: brand.id.clone(),
            power: "100 hp".to_string(),
            yt_url: "https://youtu.be/x".to_string(),
            biketype: biketypes.iter().map(|t| t.id.clone()).collect(),
        }
        .into_model()
    }

    #[tokio::test]
    async fn insert_get_replace_delete_round_trip() {
        let store = MemoryStore::new();
        let ducati = brand("Ducati");
        store.insert_brand(ducati.clone()).await.unwrap();

        assert_eq!(store.get_brand(&ducati.id).await.unwrap(), Some(ducati.clone()));
        assert_eq!(store.count_brands().await.unwrap(), 1);

        let renamed = Brand {
            brand_name: "Ducati Motor Holding".to_string(),
            ..ducati.clone()
        };
        assert!(store.replace_brand(renamed.clone()).await.unwrap());
        assert_eq!(
            store.get_brand(&ducati.id).await.unwrap().unwrap().brand_name,
            "Ducati Motor Holding"
        );

        assert!(store.delete_brand(&ducati.id).await.unwrap());
        assert!(!store.delete_brand(&ducati.id).await.unwrap());
        assert_eq!(store.count_brands().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn replace_of_unknown_id_is_rejected() {
        let store = MemoryStore::new();
        let ghost = brand("Ghost");
        assert!(!store.replace_brand(ghost).await.unwrap());
        assert_eq!(store.count_brands().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_biketype_by_name_is_exact_and_case_sensitive() {
        let store = MemoryStore::new();
        let cruiser = biketype("Cruiser");
        store.insert_biketype(cruiser.clone()).await.unwrap();

        let found = store.find_biketype_by_name("Cruiser").await.unwrap();
        assert_eq!(found, Some(cruiser));
        assert_eq!(store.find_biketype_by_name("cruiser").await.unwrap(), None);
        assert_eq!(store.find_biketype_by_name("Cruise").await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_models_filters_by_brand_and_biketype() {
        let store = MemoryStore::new();
        let ducati = brand("Ducati");
        let honda = brand("Honda");
        let sport = biketype("Sport");
        let naked = biketype("Naked");

        let monster = model("Monster", &ducati, &[&naked, &sport]);
        let fireblade = model("Fireblade", &honda, &[&sport]);
        store.insert_model(monster.clone()).await.unwrap();
        store.insert_model(fireblade.clone()).await.unwrap();

        let by_brand = store
            .find_models(&ModelFilter::ByBrand(ducati.id.clone()))
            .await
            .unwrap();
        assert_eq!(by_brand, vec![monster.clone()]);

        let mut by_type = store
            .find_models(&ModelFilter::ByBikeType(sport.id.clone()))
            .await
            .unwrap();
        by_type.sort_by(|a, b| a.model_name.cmp(&b.model_name));
        assert_eq!(by_type, vec![fireblade, monster]);

        let none = store
            .find_models(&ModelFilter::ByBikeType("no-such-type".to_string()))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
