use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use super::Resource;

/// Column-subset view of the shared `datadiri` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "datadiri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pendidikan: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct PendidikanPayload {
    pub pendidikan: String,
}

impl Resource for Entity {
    type ActiveModel = ActiveModel;
    type Payload = PendidikanPayload;

    const DISPLAY: &'static str = "Pendidikan";

    fn filter_column() -> Column {
        Column::Pendidikan
    }

    fn create_model(payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            pendidikan: Set(payload.pendidikan),
            created_at: Set(now),
            ..Default::default()
        }
    }

    fn update_model(id: i64, payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            pendidikan: Set(payload.pendidikan),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
    }
}
