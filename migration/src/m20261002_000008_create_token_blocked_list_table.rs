use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TokenBlockedList::Table)
                    .if_not_exists()
                    .col(pk_auto(TokenBlockedList::Id))
                    .col(string_len(TokenBlockedList::Jti, 36))
                    .col(timestamp_with_time_zone(TokenBlockedList::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Every protected request looks its jti up here
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_token_blocked_list_jti")
                    .table(TokenBlockedList::Table)
                    .col(TokenBlockedList::Jti)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TokenBlockedList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TokenBlockedList {
    Table,
    Id,
    Jti,
    CreatedAt,
}
