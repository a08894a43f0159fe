use crate::model::{BikeType, Brand, Id, Model, NewBikeType, NewBrand, NewModel};
use crate::store::traits::CatalogStore;
use anyhow::Result;

/// Insert a new brand. Brands are not deduplicated: two brands may share a
/// name and each keeps its own id.
pub async fn create_brand<S: CatalogStore>(store: &S, candidate: NewBrand) -> Result<Brand> {
    let brand = candidate.into_brand();
    store.insert_brand(brand.clone()).await?;
    Ok(brand)
}

/// Insert a new bike type, unless one with exactly the same name already
/// exists. On a name hit the existing record is returned untouched, so the
/// caller redirects to it instead of creating a duplicate.
pub async fn create_biketype<S: CatalogStore>(
    store: &S,
    candidate: NewBikeType,
) -> Result<BikeType> {
    if let Some(existing) = store.find_biketype_by_name(&candidate.name).await? {
        return Ok(existing);
    }
    let biketype = candidate.into_biketype();
    store.insert_biketype(biketype.clone()).await?;
    Ok(biketype)
}

/// Insert a new model. The brand and biketype references are stored as
/// submitted; their existence is not re-checked here.
pub async fn create_model<S: CatalogStore>(store: &S, candidate: NewModel) -> Result<Model> {
    let model = candidate.into_model();
    store.insert_model(model.clone()).await?;
    Ok(model)
}

/// Replace every stored field of the brand at `id` with the candidate,
/// keeping the id. Fields the candidate leaves empty are stored empty.
/// Returns None when the id resolves to nothing.
pub async fn update_brand<S: CatalogStore>(
    store: &S,
    id: &Id,
    candidate: NewBrand,
) -> Result<Option<Brand>> {
    let brand = candidate.into_brand_with_id(id.clone());
    if store.replace_brand(brand.clone()).await? {
        Ok(Some(brand))
    } else {
        Ok(None)
    }
}

pub async fn update_biketype<S: CatalogStore>(
    store: &S,
    id: &Id,
    candidate: NewBikeType,
) -> Result<Option<BikeType>> {
    let biketype = candidate.into_biketype_with_id(id.clone());
    if store.replace_biketype(biketype.clone()).await? {
        Ok(Some(biketype))
    } else {
        Ok(None)
    }
}

pub async fn update_model<S: CatalogStore>(
    store: &S,
    id: &Id,
    candidate: NewModel,
) -> Result<Option<Model>> {
    let model = candidate.into_model_with_id(id.clone());
    if store.replace_model(model.clone()).await? {
        Ok(Some(model))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BikeTypeStore, BrandStore, MemoryStore, ModelStore};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn brands_with_the_same_name_are_both_created() {
        let store = MemoryStore::new();
        let candidate = NewBrand {
            brand_name: "Norton".to_string(),
            founding_date: None,
        };
        let first = create_brand(&store, candidate.clone()).await.unwrap();
        let second = create_brand(&store, candidate).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count_brands().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_biketype_name_resolves_to_the_existing_record() {
        let store = MemoryStore::new();
        let first = create_biketype(
            &store,
            NewBikeType {
                name: "Cruiser".to_string(),
            },
        )
        .await
        .unwrap();
        let second = create_biketype(
            &store,
            NewBikeType {
                name: "Cruiser".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.count_biketypes().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn biketype_dedup_is_case_sensitive() {
        let store = MemoryStore::new();
        let upper = create_biketype(
            &store,
            NewBikeType {
                name: "Cruiser".to_string(),
            },
        )
        .await
        .unwrap();
        let lower = create_biketype(
            &store,
            NewBikeType {
                name: "cruiser".to_string(),
            },
        )
        .await
        .unwrap();

        assert_ne!(upper.id, lower.id);
        assert_eq!(store.count_biketypes().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn model_references_are_stored_unchecked() {
        let store = MemoryStore::new();
        let model = create_model(
            &store,
            NewModel {
                model_name: "Phantom".to_string(),
                brand: "no-such-brand".to_string(),
                power: "80 hp".to_string(),
                yt_url: "https://youtu.be/x".to_string(),
                biketype: vec!["no-such-type".to_string()],
            },
        )
        .await
        .unwrap();

        assert_eq!(store.get_model(&model.id).await.unwrap(), Some(model));
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_keeps_the_id() {
        let store = MemoryStore::new();
        let original = create_brand(
            &store,
            NewBrand {
                brand_name: "Ducati".to_string(),
                founding_date: NaiveDate::from_ymd_opt(1926, 7, 4),
            },
        )
        .await
        .unwrap();

        // Candidate without a founding date: the stored date must be dropped,
        // not carried over from the previous record.
        let updated = update_brand(
            &store,
            &original.id,
            NewBrand {
                brand_name: "Ducati Corse".to_string(),
                founding_date: None,
            },
        )
        .await
        .unwrap()
        .expect("target exists");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.brand_name, "Ducati Corse");
        assert_eq!(updated.founding_date, None);
        assert_eq!(
            store.get_brand(&original.id).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn update_of_a_missing_id_changes_nothing() {
        let store = MemoryStore::new();
        let outcome = update_biketype(
            &store,
            &"ghost".to_string(),
            NewBikeType {
                name: "Touring".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(outcome, None);
        assert_eq!(store.count_biketypes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_does_not_deduplicate_biketype_names() {
        let store = MemoryStore::new();
        let sport = create_biketype(
            &store,
            NewBikeType {
                name: "Sport".to_string(),
            },
        )
        .await
        .unwrap();
        let touring = create_biketype(
            &store,
            NewBikeType {
                name: "Touring".to_string(),
            },
        )
        .await
        .unwrap();

        // Renaming Touring to Sport is a plain replace even though the name
        // now collides; dedup applies only on create.
        let renamed = update_biketype(
            &store,
            &touring.id,
            NewBikeType {
                name: "Sport".to_string(),
            },
        )
        .await
        .unwrap()
        .expect("target exists");

        assert_eq!(renamed.id, touring.id);
        assert_ne!(renamed.id, sport.id);
        assert_eq!(store.count_biketypes().await.unwrap(), 2);
    }
}
