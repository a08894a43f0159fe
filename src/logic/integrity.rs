use crate::model::{BikeType, Brand, Id, Model};
use crate::store::traits::{CatalogStore, ModelFilter};
use anyhow::Result;

/// A delete target and the models that reference it, fetched together.
/// Feeds both the confirmation view and the execute path.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCheck<T> {
    pub target: Option<T>,
    pub dependents: Vec<Model>,
}

/// Result of an execute-deletion request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    /// The target was already gone; treated as a successful no-op.
    Missing,
    /// One or more models still reference the target; nothing was deleted.
    Blocked { target: T, dependents: Vec<Model> },
    Deleted,
}

pub async fn brand_delete_check<S: CatalogStore>(
    store: &S,
    id: &Id,
) -> Result<DeleteCheck<Brand>> {
    // The filter must outlive the futures the join macro holds.
    let filter = ModelFilter::ByBrand(id.clone());
    let (target, dependents) =
        tokio::try_join!(store.get_brand(id), store.find_models(&filter))?;
    Ok(DeleteCheck { target, dependents })
}

pub async fn biketype_delete_check<S: CatalogStore>(
    store: &S,
    id: &Id,
) -> Result<DeleteCheck<BikeType>> {
    let filter = ModelFilter::ByBikeType(id.clone());
    let (target, dependents) =
        tokio::try_join!(store.get_biketype(id), store.find_models(&filter))?;
    Ok(DeleteCheck { target, dependents })
}

/// Delete a brand unless models still reference it. The dependency check and
/// the delete are not atomic; a concurrent insert can slip between them.
pub async fn delete_brand_checked<S: CatalogStore>(
    store: &S,
    id: &Id,
) -> Result<DeleteOutcome<Brand>> {
    let DeleteCheck { target, dependents } = brand_delete_check(store, id).await?;
    let Some(target) = target else {
        return Ok(DeleteOutcome::Missing);
    };
    if !dependents.is_empty() {
        return Ok(DeleteOutcome::Blocked { target, dependents });
    }
    store.delete_brand(id).await?;
    Ok(DeleteOutcome::Deleted)
}

pub async fn delete_biketype_checked<S: CatalogStore>(
    store: &S,
    id: &Id,
) -> Result<DeleteOutcome<BikeType>> {
    let DeleteCheck { target, dependents } = biketype_delete_check(store, id).await?;
    let Some(target) = target else {
        return Ok(DeleteOutcome::Missing);
    };
    if !dependents.is_empty() {
        return Ok(DeleteOutcome::Blocked { target, dependents });
    }
    store.delete_biketype(id).await?;
    Ok(DeleteOutcome::Deleted)
}

/// Models have no dependents; deletion is unconditional once the target
/// resolves.
pub async fn delete_model<S: CatalogStore>(store: &S, id: &Id) -> Result<DeleteOutcome<Model>> {
    if store.get_model(id).await?.is_none() {
        return Ok(DeleteOutcome::Missing);
    }
    store.delete_model(id).await?;
    Ok(DeleteOutcome::Deleted)
}
