pub mod agama;
pub mod jenis_kelamin;
pub mod jenis_pegawai;
pub mod pegawai;
pub mod pendidikan;
pub mod status_pegawai;

use sea_orm::{
    prelude::DateTime, ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use serde::{de::DeserializeOwned, Serialize};

/// Descriptor tying one logical resource to its entity, its request payload
/// and the column subset it owns.
///
/// Several resources map to the shared `datadiri` table and only read/write
/// their own columns; writes from sibling resources to the same row are
/// last-write-wins per column set, with no row-version isolation.
pub trait Resource: EntityTrait + Send + Sync + 'static
where
    Self::Model: IntoActiveModel<<Self as Resource>::ActiveModel> + Serialize + Send + Sync,
    <Self::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;
    type Payload: DeserializeOwned + Send + Sync + 'static;

    /// Name used in response messages, e.g. "Agama".
    const DISPLAY: &'static str;

    /// Column the optional `search` substring filter applies to.
    fn filter_column() -> Self::Column;

    /// ActiveModel for an insert: payload fields plus a server-set
    /// `created_at`, primary key left unset.
    fn create_model(payload: Self::Payload, now: DateTime) -> <Self as Resource>::ActiveModel;

    /// ActiveModel for an update of row `id`: payload fields plus a
    /// refreshed `updated_at`; columns owned by sibling resources stay unset.
    fn update_model(id: i64, payload: Self::Payload, now: DateTime) -> <Self as Resource>::ActiveModel;
}
