use crate::model::{BikeType, Brand, Model};
use crate::store::CatalogStore;
use anyhow::Result;
use chrono::NaiveDate;

/// Helper function to build a seed Brand with a fixed id
fn seed_brand(id: &str, name: &str, founded: Option<(i32, u32, u32)>) -> Brand {
    Brand {
        id: id.to_string(),
        brand_name: name.to_string(),
        founding_date: founded.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    }
}

/// Helper function to build a seed BikeType with a fixed id
fn seed_biketype(id: &str, name: &str) -> BikeType {
    BikeType {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Helper function to build a seed Model with a fixed id
fn seed_model(
    id: &str,
    name: &str,
    brand: &str,
    power: &str,
    yt_url: &str,
    biketype: &[&str],
) -> Model {
    Model {
        id: id.to_string(),
        model_name: name.to_string(),
        brand: brand.to_string(),
        power: power.to_string(),
        yt_url: yt_url.to_string(),
        biketype: biketype.iter().map(|t| t.to_string()).collect(),
    }
}

/// Loads the demonstration catalog. Records are keyed by fixed ids and a
/// reload skips anything already present.
pub async fn load_seed_data<S: CatalogStore>(store: &S) -> Result<()> {
    load_brands(store).await?;
    load_biketypes(store).await?;
    load_models(store).await?;

    Ok(())
}

async fn load_brands<S: CatalogStore>(store: &S) -> Result<()> {
    let brands = vec![
        seed_brand("brand-ducati", "Ducati", Some((1926, 7, 4))),
        seed_brand("brand-honda", "Honda", Some((1948, 9, 24))),
        seed_brand("brand-bmw", "BMW", Some((1916, 3, 7))),
        seed_brand("brand-yamaha", "Yamaha", Some((1955, 7, 1))),
        seed_brand("brand-norton", "Norton", None),
    ];

    for brand in brands {
        if store.get_brand(&brand.id).await?.is_none() {
            store.insert_brand(brand).await?;
        }
    }

    Ok(())
}

async fn load_biketypes<S: CatalogStore>(store: &S) -> Result<()> {
    let biketypes = vec![
        seed_biketype("type-cruiser", "Cruiser"),
        seed_biketype("type-sport", "Sport"),
        seed_biketype("type-touring", "Touring"),
        seed_biketype("type-naked", "Naked"),
        seed_biketype("type-adventure", "Adventure"),
    ];

    for biketype in biketypes {
        if store.get_biketype(&biketype.id).await?.is_none() {
            store.insert_biketype(biketype).await?;
        }
    }

    Ok(())
}

async fn load_models<S: CatalogStore>(store: &S) -> Result<()> {
    let models = vec![
        seed_model(
            "model-panigale-v4",
            "Panigale V4",
            "brand-ducati",
            "215 hp",
            "https://www.youtube.com/watch?v=blswVCYCBJE",
            &["type-sport"],
        ),
        seed_model(
            "model-multistrada-v4",
            "Multistrada V4",
            "brand-ducati",
            "170 hp",
            "https://www.youtube.com/watch?v=qQm0NUoSPhs",
            &["type-touring", "type-adventure"],
        ),
        seed_model(
            "model-cb750",
            "CB750",
            "brand-honda",
            "67 hp",
            "https://www.youtube.com/watch?v=Ibxcejqrj2U",
            &["type-naked"],
        ),
        seed_model(
            "model-gold-wing",
            "Gold Wing",
            "brand-honda",
            "125 hp",
            "https://www.youtube.com/watch?v=k2B9PXmfvWo",
            &["type-touring"],
        ),
        seed_model(
            "model-r1250gs",
            "R 1250 GS",
            "brand-bmw",
            "136 hp",
            "https://www.youtube.com/watch?v=ZYZEYXpzbO8",
            &["type-adventure", "type-touring"],
        ),
        seed_model(
            "model-mt07",
            "MT-07",
            "brand-yamaha",
            "73 hp",
            "https://www.youtube.com/watch?v=S5d1LEcmMYo",
            &["type-naked"],
        ),
    ];

    for model in models {
        if store.get_model(&model.id).await?.is_none() {
            store.insert_model(model).await?;
        }
    }

    Ok(())
}
