use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use super::Resource;

/// Column-subset view of the shared `datadiri` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "datadiri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status_pegawai: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct StatusPegawaiPayload {
    pub status_pegawai: String,
}

impl Resource for Entity {
    type ActiveModel = ActiveModel;
    type Payload = StatusPegawaiPayload;

    const DISPLAY: &'static str = "Status Pegawai";

    fn filter_column() -> Column {
        Column::StatusPegawai
    }

    fn create_model(payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            status_pegawai: Set(payload.status_pegawai),
            created_at: Set(now),
            ..Default::default()
        }
    }

    fn update_model(id: i64, payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            status_pegawai: Set(payload.status_pegawai),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
    }
}
