pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_people_table;
mod m20261001_000003_create_planet_table;
mod m20261001_000004_create_vehicle_table;
mod m20261001_000005_create_favorite_people_table;
mod m20261001_000006_create_favorite_planet_table;
mod m20261001_000007_create_favorite_vehicle_table;
mod m20261002_000008_create_token_blocked_list_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_people_table::Migration),
            Box::new(m20261001_000003_create_planet_table::Migration),
            Box::new(m20261001_000004_create_vehicle_table::Migration),
            Box::new(m20261001_000005_create_favorite_people_table::Migration),
            Box::new(m20261001_000006_create_favorite_planet_table::Migration),
            Box::new(m20261001_000007_create_favorite_vehicle_table::Migration),
            Box::new(m20261002_000008_create_token_blocked_list_table::Migration),
        ]
    }
}
