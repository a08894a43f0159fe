use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::model::{BikeType, Brand, Id, Model};
use crate::store::traits::{BikeTypeStore, BrandStore, CatalogStore, ModelFilter, ModelStore};

/// PostgreSQL-backed catalog store. Each collection is a document table
/// (`id TEXT PRIMARY KEY, doc JSONB NOT NULL`); records round-trip through
/// serde_json and reverse lookups use JSONB operators.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL and pool size
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the document tables if they are missing
    pub async fn migrate(&self) -> Result<()> {
        for table in ["brands", "biketypes", "models"] {
            let statement = format!(
                "CREATE TABLE IF NOT EXISTS {table} (id TEXT PRIMARY KEY, doc JSONB NOT NULL)"
            );
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Failed to create {table} table"))?;
        }
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl BrandStore for PostgresStore {
    async fn get_brand(&self, id: &Id) -> Result<Option<Brand>> {
        let row = sqlx::query("SELECT doc FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch brand")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let brand = serde_json::from_value(row.get("doc"))
            .context("Failed to deserialize brand document")?;
        Ok(Some(brand))
    }

    async fn list_brands(&self) -> Result<Vec<Brand>> {
        let rows = sqlx::query("SELECT doc FROM brands")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list brands")?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row.get("doc"))
                    .context("Failed to deserialize brand document")
            })
            .collect()
    }

    async fn insert_brand(&self, brand: Brand) -> Result<()> {
        let doc = serde_json::to_value(&brand).context("Failed to serialize brand")?;
        sqlx::query("INSERT INTO brands (id, doc) VALUES ($1, $2)")
            .bind(&brand.id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .context("Failed to insert brand")?;
        Ok(())
    }

    async fn replace_brand(&self, brand: Brand) -> Result<bool> {
        let doc = serde_json::to_value(&brand).context("Failed to serialize brand")?;
        let result = sqlx::query("UPDATE brands SET doc = $2 WHERE id = $1")
            .bind(&brand.id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .context("Failed to replace brand")?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_brand(&self, id: &Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete brand")?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_brands(&self) -> Result<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM brands")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count brands")?;
        let count: i64 = row.get("count");
        Ok(count as usize)
    }
}

#[async_trait::async_trait]
impl BikeTypeStore for PostgresStore {
    async fn get_biketype(&self, id: &Id) -> Result<Option<BikeType>> {
        let row = sqlx::query("SELECT doc FROM biketypes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch biketype")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let biketype = serde_json::from_value(row.get("doc"))
            .context("Failed to deserialize biketype document")?;
        Ok(Some(biketype))
    }

    async fn find_biketype_by_name(&self, name: &str) -> Result<Option<BikeType>> {
        let row = sqlx::query("SELECT doc FROM biketypes WHERE doc->>'name' = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to find biketype by name")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let biketype = serde_json::from_value(row.get("doc"))
            .context("Failed to deserialize biketype document")?;
        Ok(Some(biketype))
    }

    async fn list_biketypes(&self) -> Result<Vec<BikeType>> {
        let rows = sqlx::query("SELECT doc FROM biketypes")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list biketypes")?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row.get("doc"))
                    .context("Failed to deserialize biketype document")
            })
            .collect()
    }

    async fn insert_biketype(&self, biketype: BikeType) -> Result<()> {
        let doc = serde_json::to_value(&biketype).context("Failed to serialize biketype")?;
        sqlx::query("INSERT INTO biketypes (id, doc) VALUES ($1, $2)")
            .bind(&biketype.id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .context("Failed to insert biketype")?;
        Ok(())
    }

    async fn replace_biketype(&self, biketype: BikeType) -> Result<bool> {
        let doc = serde_json::to_value(&biketype).context("Failed to serialize biketype")?;
        let result = sqlx::query("UPDATE biketypes SET doc = $2 WHERE id = $1")
            .bind(&biketype.id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .context("Failed to replace biketype")?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_biketype(&self, id: &Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM biketypes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete biketype")?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_biketypes(&self) -> Result<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM biketypes")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count biketypes")?;
        let count: i64 = row.get("count");
        Ok(count as usize)
    }
}

#[async_trait::async_trait]
impl ModelStore for PostgresStore {
    async fn get_model(&self, id: &Id) -> Result<Option<Model>> {
        let row = sqlx::query("SELECT doc FROM models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch model")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let model = serde_json::from_value(row.get("doc"))
            .context("Failed to deserialize model document")?;
        Ok(Some(model))
    }

    async fn list_models(&self) -> Result<Vec<Model>> {
        let rows = sqlx::query("SELECT doc FROM models")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list models")?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row.get("doc"))
                    .context("Failed to deserialize model document")
            })
            .collect()
    }

    async fn find_models(&self, filter: &ModelFilter) -> Result<Vec<Model>> {
        // `doc->'biketype' ? $1` tests membership of a string in the JSONB array.
        let (statement, id) = match filter {
            ModelFilter::ByBrand(brand_id) => {
                ("SELECT doc FROM models WHERE doc->>'brand' = $1", brand_id)
            }
            ModelFilter::ByBikeType(type_id) => {
                ("SELECT doc FROM models WHERE doc->'biketype' ? $1", type_id)
            }
        };

        let rows = sqlx::query(statement)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to find models")?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row.get("doc"))
                    .context("Failed to deserialize model document")
            })
            .collect()
    }

    async fn insert_model(&self, model: Model) -> Result<()> {
        let doc = serde_json::to_value(&model).context("Failed to serialize model")?;
        sqlx::query("INSERT INTO models (id, doc) VALUES ($1, $2)")
            .bind(&model.id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .context("Failed to insert model")?;
        Ok(())
    }

    async fn replace_model(&self, model: Model) -> Result<bool> {
        let doc = serde_json::to_value(&model).context("Failed to serialize model")?;
        let result = sqlx::query("UPDATE models SET doc = $2 WHERE id = $1")
            .bind(&model.id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .context("Failed to replace model")?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_model(&self, id: &Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete model")?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_models(&self) -> Result<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM models")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count models")?;
        let count: i64 = row.get("count");
        Ok(count as usize)
    }
}

impl CatalogStore for PostgresStore {}
