use std::{future::Future, marker::PhantomData, time::Duration};

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter,
};
use thiserror::Error;
use tokio::time::timeout;

use crate::models::Resource;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Single-table store layer shared by all resources. One instance per
/// request; the connection pool is the only shared state.
pub struct CrudRepo<R: Resource>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    db: DatabaseConnection,
    query_timeout: Duration,
    _resource: PhantomData<R>,
}

impl<R: Resource> CrudRepo<R>
where
    R::Model: sea_orm::IntoActiveModel<<R as Resource>::ActiveModel> + serde::Serialize + Send + Sync,
    <R::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    pub fn new(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self {
            db,
            query_timeout,
            _resource: PhantomData,
        }
    }

    /// Bounds a datastore round trip so a slow query cannot hold the worker
    /// past the configured deadline.
    async fn bounded<F, T>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(StoreError::Db),
            Err(_) => Err(StoreError::Timeout(self.query_timeout)),
        }
    }

    pub async fn list(&self, filter: &str) -> Result<Vec<R::Model>, StoreError> {
        let mut query = R::find();
        if !filter.is_empty() {
            query = query.filter(R::filter_column().contains(filter));
        }
        self.bounded(query.all(&self.db)).await
    }

    pub async fn get(&self, id: i64) -> Result<R::Model, StoreError> {
        let row = self.bounded(R::find_by_id(id).one(&self.db)).await?;

        row.ok_or(StoreError::NotFound)
    }

    pub async fn create(
        &self,
        payload: <R as Resource>::Payload,
    ) -> Result<R::Model, StoreError> {
        let model = R::create_model(payload, chrono::Utc::now().naive_utc());
        self.bounded(model.insert(&self.db)).await
    }

    /// Existence check and write are separate statements; a row deleted in
    /// between makes the write fail as a store error.
    pub async fn update(
        &self,
        id: i64,
        payload: <R as Resource>::Payload,
    ) -> Result<R::Model, StoreError> {
        self.get(id).await?;

        let model = R::update_model(id, payload, chrono::Utc::now().naive_utc());
        self.bounded(model.update(&self.db)).await
    }

    /// Deleting an id that no longer exists is a success with zero rows
    /// affected.
    pub async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = self.bounded(R::delete_by_id(id).exec(&self.db)).await?;

        Ok(result.rows_affected)
    }
}
