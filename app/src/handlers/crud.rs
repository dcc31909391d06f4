use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    core::state::AppState,
    models::Resource,
    repos::crud::{CrudRepo, StoreError},
    utils::response::{ApiError, Envelope},
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: String,
}

fn repo<R: Resource>(state: &AppState) -> CrudRepo<R>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    CrudRepo::new(state.database.clone(), state.config.query_timeout())
}

pub async fn list<R: Resource>(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    let rows = repo::<R>(&state).list(&params.search).await.map_err(|e| {
        error!("Failed to list {}: {}", R::DISPLAY, e);
        ApiError::Store(format!("Failed to Get All {}", R::DISPLAY))
    })?;

    Ok(Envelope::list(
        format!("Successfully Get All {}", R::DISPLAY),
        rows,
        params.search,
    ))
}

pub async fn get_by_id<R: Resource>(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    let Path(id) = id.map_err(|_| ApiError::Bind("Failed to Bind Input".to_string()))?;

    let row = repo::<R>(&state).get(id).await.map_err(|e| match e {
        StoreError::NotFound => {
            ApiError::NotFound(format!("{} with ID {} Not Found", R::DISPLAY, id))
        }
        other => {
            error!("Failed to get {} {}: {}", R::DISPLAY, id, other);
            ApiError::Store(format!("Failed to Get {} By ID", R::DISPLAY))
        }
    })?;

    Ok(Envelope::data(
        format!("Successfully Get {} By ID : {}", R::DISPLAY, id),
        row,
    ))
}

pub async fn create<R: Resource>(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<<R as Resource>::Payload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    let Json(payload) = payload.map_err(|_| ApiError::Bind("Failed to Bind Input".to_string()))?;

    let row = repo::<R>(&state).create(payload).await.map_err(|e| {
        error!("Failed to create {}: {}", R::DISPLAY, e);
        ApiError::Store(format!("Failed to Create {}", R::DISPLAY))
    })?;

    info!("{} created", R::DISPLAY);

    Ok(Envelope::created(
        format!("Successfully Create a {}", R::DISPLAY),
        row,
    ))
}

pub async fn update<R: Resource>(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<<R as Resource>::Payload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    let Path(id) = id.map_err(|_| ApiError::Bind("Failed to Bind Input".to_string()))?;
    let Json(payload) = payload.map_err(|_| ApiError::Bind("Failed to Bind Input".to_string()))?;

    let row = repo::<R>(&state)
        .update(id, payload)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => {
                ApiError::NotFound(format!("{} with ID {} Not Found", R::DISPLAY, id))
            }
            other => {
                error!("Failed to update {} {}: {}", R::DISPLAY, id, other);
                ApiError::Store(format!("Failed to Update {} By ID", R::DISPLAY))
            }
        })?;

    Ok(Envelope::data(
        format!("Successfully Update {} By ID : {}", R::DISPLAY, id),
        row,
    ))
}

pub async fn remove<R: Resource>(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    let Path(id) = id.map_err(|_| ApiError::Bind("Failed to Bind Input".to_string()))?;

    repo::<R>(&state).delete(id).await.map_err(|e| {
        error!("Failed to delete {} {}: {}", R::DISPLAY, id, e);
        ApiError::Store(format!("Failed to Delete {} By ID", R::DISPLAY))
    })?;

    Ok(StatusCode::NO_CONTENT)
}
