use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::api::error::AppError;
use crate::api::handlers::AppState;
use crate::logic::forms::FormData;
use crate::logic::{catalog_ops, integrity, resolve, validate};
use crate::model::{BikeType, Brand, Id, NewModel};
use crate::store::traits::CatalogStore;
use crate::views::{self, ModelFormContext};

const MODEL_LIST_URL: &str = "/catalog/models";

pub async fn model_list<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let summaries = resolve::model_list(store.as_ref()).await?;
    Ok(views::model_list_page(&summaries))
}

pub async fn model_detail<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, AppError> {
    match resolve::model_detail(store.as_ref(), &id).await? {
        Some(detail) => Ok(views::model_detail_page(&detail)),
        None => Err(AppError::NotFound("Model")),
    }
}

/// The model form offers every brand and bike type as options.
async fn form_options<S: CatalogStore>(store: &S) -> Result<(Vec<Brand>, Vec<BikeType>), AppError> {
    let (brands, biketypes) =
        tokio::try_join!(resolve::brand_list(store), resolve::biketype_list(store))?;
    Ok((brands, biketypes))
}

pub async fn model_create_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let (brands, biketypes) = form_options(store.as_ref()).await?;
    Ok(views::model_form_page(&ModelFormContext {
        title: "Create Model",
        brands: &brands,
        biketypes: &biketypes,
        candidate: &NewModel::default(),
        errors: &[],
    }))
}

pub async fn model_create_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from_pairs(pairs);
    let (candidate, errors) = validate::model_from_form(&form);
    if !errors.is_empty() {
        let (brands, biketypes) = form_options(store.as_ref()).await?;
        return Ok(views::model_form_page(&ModelFormContext {
            title: "Create Model",
            brands: &brands,
            biketypes: &biketypes,
            candidate: &candidate,
            errors: &errors,
        })
        .into_response());
    }

    let model = catalog_ops::create_model(store.as_ref(), candidate).await?;
    Ok(Redirect::to(&model.url()).into_response())
}

pub async fn model_update_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Html<String>, AppError> {
    let Some(model) = store.get_model(&id).await? else {
        return Err(AppError::NotFound("Model"));
    };

    let (brands, biketypes) = form_options(store.as_ref()).await?;
    let candidate = NewModel {
        model_name: model.model_name,
        brand: model.brand,
        power: model.power,
        yt_url: model.yt_url,
        biketype: model.biketype,
    };
    Ok(views::model_form_page(&ModelFormContext {
        title: "Update Model",
        brands: &brands,
        biketypes: &biketypes,
        candidate: &candidate,
        errors: &[],
    }))
}

pub async fn model_update_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from_pairs(pairs);
    let (candidate, errors) = validate::model_from_form(&form);
    if !errors.is_empty() {
        let (brands, biketypes) = form_options(store.as_ref()).await?;
        return Ok(views::model_form_page(&ModelFormContext {
            title: "Update Model",
            brands: &brands,
            biketypes: &biketypes,
            candidate: &candidate,
            errors: &errors,
        })
        .into_response());
    }

    match catalog_ops::update_model(store.as_ref(), &id, candidate).await? {
        Some(model) => Ok(Redirect::to(&model.url()).into_response()),
        None => Err(AppError::NotFound("Model")),
    }
}

pub async fn model_delete_get<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Response, AppError> {
    match store.get_model(&id).await? {
        Some(model) => Ok(views::model_delete_page(&model).into_response()),
        None => Ok(Redirect::to(MODEL_LIST_URL).into_response()),
    }
}

/// Models have no dependents; the outcome is a redirect whether the target
/// existed or was already gone.
pub async fn model_delete_post<S: CatalogStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Redirect, AppError> {
    integrity::delete_model(store.as_ref(), &id).await?;
    Ok(Redirect::to(MODEL_LIST_URL))
}
