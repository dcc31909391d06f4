use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::crud::{create, get_by_id, list, remove, update},
    models::Resource,
};

/// The uniform five-endpoint surface every resource exposes.
pub fn resource_routes<R: Resource>() -> Router<Arc<AppState>>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/:id",
            get(get_by_id::<R>).put(update::<R>).delete(remove::<R>),
        )
}
