use axum::{
    extract::State,
    response::{Html, Json, Redirect},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::AppError;
use crate::logic::resolve;
use crate::store::traits::CatalogStore;
use crate::views;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// The site root just forwards to the catalog.
pub async fn home() -> Redirect {
    Redirect::to("/catalog")
}

/// Catalog landing page: record counts across all three collections.
pub async fn index<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let counts = resolve::catalog_counts(store.as_ref()).await?;
    Ok(views::index_page(&counts))
}
