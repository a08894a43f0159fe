use crate::model::{BikeType, Brand, Id, Model};
use crate::store::traits::{CatalogStore, ModelFilter};
use anyhow::Result;
use itertools::Itertools;
use std::collections::HashMap;

/// Collection sizes for the catalog landing page, fetched in parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCounts {
    pub models: usize,
    pub brands: usize,
    pub biketypes: usize,
}

pub async fn catalog_counts<S: CatalogStore>(store: &S) -> Result<CatalogCounts> {
    let (models, brands, biketypes) = tokio::try_join!(
        store.count_models(),
        store.count_brands(),
        store.count_biketypes(),
    )?;
    Ok(CatalogCounts {
        models,
        brands,
        biketypes,
    })
}

/// All brands, ascending by name.
pub async fn brand_list<S: CatalogStore>(store: &S) -> Result<Vec<Brand>> {
    let brands = store.list_brands().await?;
    Ok(brands
        .into_iter()
        .sorted_by(|a, b| a.brand_name.cmp(&b.brand_name))
        .collect())
}

/// All bike types, ascending by name.
pub async fn biketype_list<S: CatalogStore>(store: &S) -> Result<Vec<BikeType>> {
    let biketypes = store.list_biketypes().await?;
    Ok(biketypes
        .into_iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect())
}

/// A model row with its brand resolved for display. `brand` is None when the
/// reference dangles.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub model: Model,
    pub brand: Option<Brand>,
}

/// All models, ascending by name, with brands resolved in one batch fetch.
pub async fn model_list<S: CatalogStore>(store: &S) -> Result<Vec<ModelSummary>> {
    let (models, brands) = tokio::try_join!(store.list_models(), store.list_brands())?;
    let brands_by_id: HashMap<Id, Brand> =
        brands.into_iter().map(|b| (b.id.clone(), b)).collect();

    Ok(models
        .into_iter()
        .sorted_by(|a, b| a.model_name.cmp(&b.model_name))
        .map(|model| {
            let brand = brands_by_id.get(&model.brand).cloned();
            ModelSummary { model, brand }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandDetail {
    pub brand: Brand,
    pub models: Vec<Model>,
}

/// Brand plus the models referencing it, fetched in parallel. None when the
/// brand itself is missing (distinct from a brand with no models).
pub async fn brand_detail<S: CatalogStore>(store: &S, id: &Id) -> Result<Option<BrandDetail>> {
    // The filter must outlive the futures the join macro holds.
    let filter = ModelFilter::ByBrand(id.clone());
    let (brand, models) = tokio::try_join!(store.get_brand(id), store.find_models(&filter))?;
    Ok(brand.map(|brand| BrandDetail {
        brand,
        models: sorted_models(models),
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BikeTypeDetail {
    pub biketype: BikeType,
    pub models: Vec<Model>,
}

pub async fn biketype_detail<S: CatalogStore>(
    store: &S,
    id: &Id,
) -> Result<Option<BikeTypeDetail>> {
    let filter = ModelFilter::ByBikeType(id.clone());
    let (biketype, models) =
        tokio::try_join!(store.get_biketype(id), store.find_models(&filter))?;
    Ok(biketype.map(|biketype| BikeTypeDetail {
        biketype,
        models: sorted_models(models),
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelDetail {
    pub model: Model,
    pub brand: Option<Brand>,
    pub biketypes: Vec<BikeType>,
}

/// Model plus its referenced records. Dangling references degrade instead of
/// failing: the brand becomes None, missing biketypes are skipped.
pub async fn model_detail<S: CatalogStore>(store: &S, id: &Id) -> Result<Option<ModelDetail>> {
    let Some(model) = store.get_model(id).await? else {
        return Ok(None);
    };

    let brand = store.get_brand(&model.brand).await?;
    let mut biketypes = Vec::with_capacity(model.biketype.len());
    for type_id in &model.biketype {
        if let Some(biketype) = store.get_biketype(type_id).await? {
            biketypes.push(biketype);
        }
    }

    Ok(Some(ModelDetail {
        model,
        brand,
        biketypes,
    }))
}

fn sorted_models(models: Vec<Model>) -> Vec<Model> {
    models
        .into_iter()
        .sorted_by(|a, b| a.model_name.cmp(&b.model_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewBikeType, NewBrand, NewModel};
    use crate::store::{BikeTypeStore, BrandStore, MemoryStore, ModelStore};

    fn new_brand(name: &str) -> Brand {
        NewBrand {
            brand_name: name.to_string(),
            founding_date: None,
        }
        .into_brand()
    }

    fn new_model(name: &str, brand_id: &str, biketype_ids: &[&str]) -> Model {
        NewModel {
            model_name: name.to_string(),
            brand: brand_id.to_string(),
            power: "100 hp".to_string(),
            yt_url: "https://youtu.be/x".to_string(),
            biketype: biketype_ids.iter().map(|s| s.to_string()).collect(),
        }
        .into_model()
    }

    #[tokio::test]
    async fn counts_reflect_every_collection() {
        let store = MemoryStore::new();
        store.insert_brand(new_brand("Ducati")).await.unwrap();
        store.insert_brand(new_brand("Honda")).await.unwrap();
        store
            .insert_biketype(
                NewBikeType {
                    name: "Sport".to_string(),
                }
                .into_biketype(),
            )
            .await
            .unwrap();

        let counts = catalog_counts(&store).await.unwrap();
        assert_eq!(
            counts,
            CatalogCounts {
                models: 0,
                brands: 2,
                biketypes: 1,
            }
        );
    }

    #[tokio::test]
    async fn listings_sort_by_natural_key_ascending() {
        let store = MemoryStore::new();
        for name in ["Yamaha", "Aprilia", "Moto3"] {
            store.insert_brand(new_brand(name)).await.unwrap();
        }

        let names: Vec<_> = brand_list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.brand_name)
            .collect();
        assert_eq!(names, vec!["Aprilia", "Moto3", "Yamaha"]);
    }

    #[tokio::test]
    async fn model_list_resolves_brands_and_tolerates_dangling_ones() {
        let store = MemoryStore::new();
        let ducati = new_brand("Ducati");
        store.insert_brand(ducati.clone()).await.unwrap();
        store
            .insert_model(new_model("Panigale", &ducati.id, &[]))
            .await
            .unwrap();
        store
            .insert_model(new_model("Orphan", "gone-brand", &[]))
            .await
            .unwrap();

        let list = model_list(&store).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].model.model_name, "Orphan");
        assert_eq!(list[0].brand, None);
        assert_eq!(list[1].model.model_name, "Panigale");
        assert_eq!(list[1].brand, Some(ducati));
    }

    #[tokio::test]
    async fn brand_detail_distinguishes_missing_from_unreferenced() {
        let store = MemoryStore::new();
        let brand = new_brand("Ducati");
        store.insert_brand(brand.clone()).await.unwrap();

        let detail = brand_detail(&store, &brand.id).await.unwrap().unwrap();
        assert_eq!(detail.brand, brand);
        assert!(detail.models.is_empty());

        assert_eq!(brand_detail(&store, &"ghost".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn biketype_detail_collects_models_referencing_the_type() {
        let store = MemoryStore::new();
        let sport = NewBikeType {
            name: "Sport".to_string(),
        }
        .into_biketype();
        store.insert_biketype(sport.clone()).await.unwrap();

        store
            .insert_model(new_model("Panigale", "brand-1", &[&sport.id]))
            .await
            .unwrap();
        store
            .insert_model(new_model("Gold Wing", "brand-2", &[]))
            .await
            .unwrap();

        let detail = biketype_detail(&store, &sport.id).await.unwrap().unwrap();
        assert_eq!(detail.biketype, sport);
        assert_eq!(detail.models.len(), 1);
        assert_eq!(detail.models[0].model_name, "Panigale");

        assert_eq!(
            biketype_detail(&store, &"ghost".to_string()).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn model_detail_resolves_references_and_skips_dangling_types() {
        let store = MemoryStore::new();
        let brand = new_brand("Ducati");
        let sport = NewBikeType {
            name: "Sport".to_string(),
        }
        .into_biketype();
        store.insert_brand(brand.clone()).await.unwrap();
        store.insert_biketype(sport.clone()).await.unwrap();

        let model = new_model("Panigale V4", &brand.id, &[&sport.id, "gone-type"]);
        store.insert_model(model.clone()).await.unwrap();

        let detail = model_detail(&store, &model.id).await.unwrap().unwrap();
        assert_eq!(detail.brand, Some(brand));
        assert_eq!(detail.biketypes, vec![sport]);

        assert_eq!(model_detail(&store, &"ghost".to_string()).await.unwrap(), None);
    }
}
