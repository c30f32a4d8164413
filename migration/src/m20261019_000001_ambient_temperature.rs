use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== AMBIENT TEMPERATURE ==========
        manager
            .create_table(
                Table::create()
                    .table(AmbientTemperature::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AmbientTemperature::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AmbientTemperature::Temp).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AmbientTemperature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AmbientTemperature {
    Table,
    Id,
    Temp,
}
