use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;
use super::m20261001_000004_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVehicle::Id))
                    .col(integer(FavoriteVehicle::UserId))
                    .col(integer(FavoriteVehicle::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_vehicle_user_id")
                            .from(FavoriteVehicle::Table, FavoriteVehicle::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_vehicle_vehicle_id")
                            .from(FavoriteVehicle::Table, FavoriteVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteVehicle {
    Table,
    Id,
    UserId,
    VehicleId,
}
