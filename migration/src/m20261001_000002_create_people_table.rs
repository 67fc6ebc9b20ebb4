use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Name, 100))
                    .col(double_null(People::Height))
                    .col(double_null(People::Mass))
                    .col(string_len_null(People::HairColor, 20))
                    .col(string_len_null(People::SkinColor, 20))
                    .col(string_len_null(People::EyeColor, 20))
                    .col(integer_null(People::BirthYear))
                    .col(string_len_null(People::Gender, 20))
                    .col(string_len_null(People::Homeworld, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    Homeworld,
}
