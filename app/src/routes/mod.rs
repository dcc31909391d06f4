pub mod crud;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    core::state::AppState,
    models::{agama, jenis_kelamin, jenis_pegawai, pegawai, pendidikan, status_pegawai},
    routes::crud::resource_routes,
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    Router::new()
        .nest("/agama", resource_routes::<agama::Entity>())
        .nest("/jeniskelamin", resource_routes::<jenis_kelamin::Entity>())
        .nest("/jenispegawai", resource_routes::<jenis_pegawai::Entity>())
        .nest("/pendidikan", resource_routes::<pendidikan::Entity>())
        .nest("/statuspegawai", resource_routes::<status_pegawai::Entity>())
        .nest("/pegawai", resource_routes::<pegawai::Entity>())
        .layer(TraceLayer::new_for_http())
        .fallback(global_error_handler)
        .with_state(state)
}
