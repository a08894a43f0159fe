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
use crate::model::{Id, NewBikeType};
use crate::store::traits::CatalogStore;
use crate::views;

const BIKETYPE_LIST_URL: &str = "/catalog/biketypes";

pub async fn biketype_list<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let biketypes = resolve::biketype_list(store.as_ref()).await?;
    Ok(views::biketype_list_page(&biketypes))
}

pub async fn biketype_detail<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, AppError> {
    match resolve::biketype_detail(store.as_ref(), &id).await? {
        Some(detail) => Ok(views::biketype_detail_page(&detail)),
        None => Err(AppError::NotFound("BikeType")),
    }
}

pub async fn biketype_create_get() -> Html<String> {
    views::biketype_form_page("Create BikeType", &NewBikeType::default(), &[])
}

/// Create submits resolve name collisions by redirecting to the existing
/// record; the redirect target is identical either way.
pub async fn biketype_create_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from_pairs(pairs);
    let (candidate, errors) = validate::biketype_from_form(&form);
    if !errors.is_empty() {
        return Ok(
            views::biketype_form_page("Create BikeType", &candidate, &errors).into_response(),
        );
    }

    let biketype = catalog_ops::create_biketype(store.as_ref(), candidate).await?;
    Ok(Redirect::to(&biketype.url()).into_response())
}

pub async fn biketype_update_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, AppError> {
    match store.get_biketype(&id).await? {
        Some(biketype) => {
            let candidate = NewBikeType {
                name: biketype.name,
            };
            Ok(views::biketype_form_page("Update BikeType", &candidate, &[]))
        }
        None => Err(AppError::NotFound("BikeType")),
    }
}

pub async fn biketype_update_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from_pairs(pairs);
    let (candidate, errors) = validate::biketype_from_form(&form);
    if !errors.is_empty() {
        return Ok(
            views::biketype_form_page("Update BikeType", &candidate, &errors).into_response(),
        );
    }

    match catalog_ops::update_biketype(store.as_ref(), &id, candidate).await? {
        Some(biketype) => Ok(Redirect::to(&biketype.url()).into_response()),
        None => Err(AppError::NotFound("BikeType")),
    }
}

pub async fn biketype_delete_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, AppError> {
    let check = integrity::biketype_delete_check(store.as_ref(), &id).await?;
    match check.target {
        Some(biketype) => {
            Ok(views::biketype_delete_page(&biketype, &check.dependents).into_response())
        }
        None => Ok(Redirect::to(BIKETYPE_LIST_URL).into_response()),
    }
}

pub async fn biketype_delete_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, AppError> {
    match integrity::delete_biketype_checked(store.as_ref(), &id).await? {
        DeleteOutcome::Blocked { target, dependents } => {
            Ok(views::biketype_delete_page(&target, &dependents).into_response())
        }
        DeleteOutcome::Deleted | DeleteOutcome::Missing => {
            Ok(Redirect::to(BIKETYPE_LIST_URL).into_response())
        }
    }
}
