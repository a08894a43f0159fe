use crate::model::{BikeType, Brand, Id, Model};
use anyhow::Result;

#[async_trait::async_trait]
pub trait BrandStore: Send + Sync {
    async fn get_brand(&self, id: &Id) -> Result<Option<Brand>>;
    async fn list_brands(&self) -> Result<Vec<Brand>>;
    async fn insert_brand(&self, brand: Brand) -> Result<()>;
    /// Replace the record with the same id. Returns false when no such record exists.
    async fn replace_brand(&self, brand: Brand) -> Result<bool>;
    async fn delete_brand(&self, id: &Id) -> Result<bool>;
    async fn count_brands(&self) -> Result<usize>;
}

#[async_trait::async_trait]
pub trait BikeTypeStore: Send + Sync {
    async fn get_biketype(&self, id: &Id) -> Result<Option<BikeType>>;
    /// Exact, case-sensitive natural-key lookup backing create-time deduplication.
    async fn find_biketype_by_name(&self, name: &str) -> Result<Option<BikeType>>;
    async fn list_biketypes(&self) -> Result<Vec<BikeType>>;
    async fn insert_biketype(&self, biketype: BikeType) -> Result<()>;
    async fn replace_biketype(&self, biketype: BikeType) -> Result<bool>;
    async fn delete_biketype(&self, id: &Id) -> Result<bool>;
    async fn count_biketypes(&self) -> Result<usize>;
}

/// Reverse lookups from Model to the records it references.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelFilter {
    ByBrand(Id),
    ByBikeType(Id),
}

#[async_trait::async_trait]
pub trait ModelStore: Send + Sync {
    async fn get_model(&self, id: &Id) -> Result<Option<Model>>;
    async fn list_models(&self) -> Result<Vec<Model>>;
    async fn find_models(&self, filter: &ModelFilter) -> Result<Vec<Model>>;
    async fn insert_model(&self, model: Model) -> Result<()>;
    async fn replace_model(&self, model: Model) -> Result<bool>;
    async fn delete_model(&self, id: &Id) -> Result<bool>;
    async fn count_models(&self) -> Result<usize>;
}

pub trait CatalogStore: BrandStore + BikeTypeStore + ModelStore + Send + Sync {}
