use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "agamas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nama_agama: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct AgamaPayload {
    pub nama_agama: String,
}

impl Resource for Entity {
    type ActiveModel = ActiveModel;
    type Payload = AgamaPayload;

    const DISPLAY: &'static str = "Agama";

    fn filter_column() -> Column {
        Column::NamaAgama
    }

    fn create_model(payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            nama_agama: Set(payload.nama_agama),
            created_at: Set(now),
            ..Default::default()
        }
    }

    fn update_model(id: i64, payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            nama_agama: Set(payload.nama_agama),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
    }
}
