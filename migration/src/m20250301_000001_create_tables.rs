use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // agamas
        manager
            .create_table(
                Table::create()
                    .table("agamas")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string("nama_agama").default(""))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().null())
                    .to_owned(),
            )
            .await?;

        // datadiri, shared by pegawai and the lookup resources. Every text
        // column defaults to '' so each resource can insert rows that only
        // carry its own column subset.
        manager
            .create_table(
                Table::create()
                    .table("datadiri")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string("nama").default(""))
                    .col(string("nik").default(""))
                    .col(string("jenis_pegawai").default(""))
                    .col(string("status_pegawai").default(""))
                    .col(string("unit").default(""))
                    .col(string("sub_unit").default(""))
                    .col(string("pendidikan").default(""))
                    .col(string("tanggal_lahir").default(""))
                    .col(string("tempat_lahir").default(""))
                    .col(string("jenis_kelamin").default(""))
                    .col(string("agama").default(""))
                    .col(string("foto").default(""))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table("datadiri").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table("agamas").to_owned())
            .await
    }
}
