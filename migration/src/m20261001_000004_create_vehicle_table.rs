use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 100))
                    .col(string_len_null(Vehicle::Model, 250))
                    .col(string_len_null(Vehicle::VehicleClass, 250))
                    .col(string_len_null(Vehicle::Manufacturer, 250))
                    .col(big_integer_null(Vehicle::CostInCredits))
                    .col(double_null(Vehicle::Length))
                    .col(integer_null(Vehicle::Crew))
                    .col(integer_null(Vehicle::Passengers))
                    .col(double_null(Vehicle::MaxAtmospheringSpeed))
                    .col(double_null(Vehicle::CargoCapacity))
                    .col(string_len_null(Vehicle::Consumables, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmospheringSpeed,
    CargoCapacity,
    Consumables,
}
