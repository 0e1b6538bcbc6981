use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string(Hotel::Name))
                    .col(string(Hotel::Image))
                    .col(
                        timestamp_with_time_zone(Hotel::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Hotel::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Image,
    CreatedAt,
    UpdatedAt,
}
