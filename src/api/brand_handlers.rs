use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::api::error::AppError;
use crate::api::handlers::AppState;
use crate::logic::forms::FormData;
use crate::logic::integrity::{self, DeleteOutcome};
use crate::logic::{catalog_ops, resolve, validate};
use crate::model::{Id, NewBrand};
use crate::store::traits::CatalogStore;
use crate::views;

const BRAND_LIST_URL: &str = "/catalog/brands";

pub async fn brand_list<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let brands = resolve::brand_list(store.as_ref()).await?;
    Ok(views::brand_list_page(&brands))
}

pub async fn brand_detail<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, AppError> {
    match resolve::brand_detail(store.as_ref(), &id).await? {
        Some(detail) => Ok(views::brand_detail_page(&detail)),
        None => Err(AppError::NotFound("Brand")),
    }
}

pub async fn brand_create_get() -> Html<String> {
    views::brand_form_page("Create Brand", &NewBrand::default(), &[])
}

pub async fn brand_create_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from_pairs(pairs);
    let (candidate, errors) = validate::brand_from_form(&form);
    if !errors.is_empty() {
        return Ok(views::brand_form_page("Create Brand", &candidate, &errors).into_response());
    }

    let brand = catalog_ops::create_brand(store.as_ref(), candidate).await?;
    Ok(Redirect::to(&brand.url()).into_response())
}

pub async fn brand_update_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, AppError> {
    match store.get_brand(&id).await? {
        Some(brand) => {
            let candidate = NewBrand {
                brand_name: brand.brand_name,
                founding_date: brand.founding_date,
            };
            Ok(views::brand_form_page("Update Brand", &candidate, &[]))
        }
        None => Err(AppError::NotFound("Brand")),
    }
}

pub async fn brand_update_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from_pairs(pairs);
    let (candidate, errors) = validate::brand_from_form(&form);
    if !errors.is_empty() {
        return Ok(views::brand_form_page("Update Brand", &candidate, &errors).into_response());
    }

    match catalog_ops::update_brand(store.as_ref(), &id, candidate).await? {
        Some(brand) => Ok(Redirect::to(&brand.url()).into_response()),
        None => Err(AppError::NotFound("Brand")),
    }
}

/// Confirmation page. A missing target redirects back to the list instead of
/// erroring; mid-delete the record may already be gone.
pub async fn brand_delete_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, AppError> {
    let check = integrity::brand_delete_check(store.as_ref(), &id).await?;
    match check.target {
        Some(brand) => Ok(views::brand_delete_page(&brand, &check.dependents).into_response()),
        None => Ok(Redirect::to(BRAND_LIST_URL).into_response()),
    }
}

pub async fn brand_delete_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, AppError> {
    match integrity::delete_brand_checked(store.as_ref(), &id).await? {
        DeleteOutcome::Blocked { target, dependents } => {
            Ok(views::brand_delete_page(&target, &dependents).into_response())
        }
        DeleteOutcome::Deleted | DeleteOutcome::Missing => {
            Ok(Redirect::to(BRAND_LIST_URL).into_response())
        }
    }
}
