use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;
use super::m20261001_000002_create_people_table::People;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePeople::Id))
                    .col(integer(FavoritePeople::UserId))
                    .col(integer(FavoritePeople::PeopleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_user_id")
                            .from(FavoritePeople::Table, FavoritePeople::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_people_id")
                            .from(FavoritePeople::Table, FavoritePeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePeople::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePeople {
    Table,
    Id,
    UserId,
    PeopleId,
}
