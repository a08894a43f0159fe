use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::{biketype_handlers, brand_handlers, handlers, model_handlers};
use crate::store::traits::CatalogStore;

pub fn create_router<S: CatalogStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Site root forwards to the catalog
        .route("/", get(handlers::home))
        .nest("/catalog", catalog_router::<S>())
        // The nest registers "/catalog" only; the trailing-slash form is a
        // separate path and gets the same landing page
        .route("/catalog/", get(handlers::index::<S>))
        // Static assets (stylesheet)
        .nest_service("/public", ServeDir::new("public"))
}

fn catalog_router<S: CatalogStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Landing page with record counts
        .route("/", get(handlers::index::<S>))
        // Brand routes
        .route("/brands", get(brand_handlers::brand_list::<S>))
        .route("/brand/create", get(brand_handlers::brand_create_get))
        .route(
            "/brand/create",
            post(brand_handlers::brand_create_post::<S>),
        )
        .route(
            "/brand/:id/update",
            get(brand_handlers::brand_update_get::<S>),
        )
        .route(
            "/brand/:id/update",
            post(brand_handlers::brand_update_post::<S>),
        )
        .route(
            "/brand/:id/delete",
            get(brand_handlers::brand_delete_get::<S>),
        )
        .route(
            "/brand/:id/delete",
            post(brand_handlers::brand_delete_post::<S>),
        )
        .route("/brand/:id", get(brand_handlers::brand_detail::<S>))
        // BikeType routes
        .route("/biketypes", get(biketype_handlers::biketype_list::<S>))
        .route(
            "/biketype/create",
            get(biketype_handlers::biketype_create_get),
        )
        .route(
            "/biketype/create",
            post(biketype_handlers::biketype_create_post::<S>),
        )
        .route(
            "/biketype/:id/update",
            get(biketype_handlers::biketype_update_get::<S>),
        )
        .route(
            "/biketype/:id/update",
            post(biketype_handlers::biketype_update_post::<S>),
        )
        .route(
            "/biketype/:id/delete",
            get(biketype_handlers::biketype_delete_get::<S>),
        )
        .route(
            "/biketype/:id/delete",
            post(biketype_handlers::biketype_delete_post::<S>),
        )
        .route(
            "/biketype/:id",
            get(biketype_handlers::biketype_detail::<S>),
        )
        // Model routes
        .route("/models", get(model_handlers::model_list::<S>))
        .route("/model/create", get(model_handlers::model_create_get::<S>))
        .route(
            "/model/create",
            post(model_handlers::model_create_post::<S>),
        )
        .route(
            "/model/:id/update",
            get(model_handlers::model_update_get::<S>),
        )
        .route(
            "/model/:id/update",
            post(model_handlers::model_update_post::<S>),
        )
        .route(
            "/model/:id/delete",
            get(model_handlers::model_delete_get::<S>),
        )
        .route(
            "/model/:id/delete",
            post(model_handlers::model_delete_post::<S>),
        )
        .route("/model/:id", get(model_handlers::model_detail::<S>))
}
