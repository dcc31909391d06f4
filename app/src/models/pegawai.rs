use sea_orm::{entity::prelude::*, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use super::Resource;

/// Full-width view of the shared `datadiri` table. The lookup resources
/// (jenis_kelamin, jenis_pegawai, pendidikan, status_pegawai) each own one
/// of these columns on their own rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "datadiri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nama: String,
    pub nik: String,
    pub jenis_pegawai: String,
    pub status_pegawai: String,
    pub unit: String,
    pub sub_unit: String,
    pub pendidikan: String,
    pub tanggal_lahir: String,
    pub tempat_lahir: String,
    pub jenis_kelamin: String,
    pub agama: String,
    pub foto: String,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Deserialize)]
pub struct PegawaiPayload {
    pub nama: String,
    pub nik: String,
    pub jenis_pegawai: String,
    pub status_pegawai: String,
    pub unit: String,
    pub sub_unit: String,
    pub pendidikan: String,
    pub tanggal_lahir: String,
    pub tempat_lahir: String,
    pub jenis_kelamin: String,
    pub agama: String,
    pub foto: String,
}

impl Resource for Entity {
    type ActiveModel = ActiveModel;
    type Payload = PegawaiPayload;

    const DISPLAY: &'static str = "Pegawai";

    fn filter_column() -> Column {
        Column::Nama
    }

    fn create_model(payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            nama: Set(payload.nama),
            nik: Set(payload.nik),
            jenis_pegawai: Set(payload.jenis_pegawai),
            status_pegawai: Set(payload.status_pegawai),
            unit: Set(payload.unit),
            sub_unit: Set(payload.sub_unit),
            pendidikan: Set(payload.pendidikan),
            tanggal_lahir: Set(payload.tanggal_lahir),
            tempat_lahir: Set(payload.tempat_lahir),
            jenis_kelamin: Set(payload.jenis_kelamin),
            agama: Set(payload.agama),
            foto: Set(payload.foto),
            created_at: Set(now),
            ..Default::default()
        }
    }

    fn update_model(id: i64, payload: Self::Payload, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            nama: Set(payload.nama),
            nik: Set(payload.nik),
            jenis_pegawai: Set(payload.jenis_pegawai),
            status_pegawai: Set(payload.status_pegawai),
            unit: Set(payload.unit),
            sub_unit: Set(payload.sub_unit),
            pendidikan: Set(payload.pendidikan),
            tanggal_lahir: Set(payload.tanggal_lahir),
            tempat_lahir: Set(payload.tempat_lahir),
            jenis_kelamin: Set(payload.jenis_kelamin),
            agama: Set(payload.agama),
            foto: Set(payload.foto),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
    }
}
