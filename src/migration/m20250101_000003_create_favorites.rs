//! Create `favorites`.
//!
//! No foreign keys: a favorite may outlive its user or catalog item. The
//! unique index rejects a second copy of the same (user, item, type) triple
//! even when two requests race past the service-level check.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer(Favorites::ItemId))
                    .col(string_len(Favorites::ItemType, 50))
                    .col(timestamp_with_time_zone(Favorites::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_favorites_user_item")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::ItemId)
                    .col(Favorites::ItemType)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    ItemId,
    ItemType,
    CreatedAt,
}
