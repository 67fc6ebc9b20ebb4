//! Favorite join-table repository.
//!
//! Handles the three favorite tables behind one `FavoriteKind` switch. Aggregation loads
//! the join rows first and then resolves owners and catalog items in one query per table.

use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};

use crate::{
    model::favorite::FavoriteKind,
    server::model::{
        favorite::{FavoritePeople, FavoritePlanet, FavoriteVehicle, Favorites},
        people::People,
        planet::Planet,
        vehicle::Vehicle,
    },
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads favorites of every kind, optionally restricted to one user.
    ///
    /// Vehicle favorites come from the vehicle join table. Rows whose owner or item
    /// cannot be resolved are skipped.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Favorites, DbErr> {
        let people_rows = filter_user(
            entity::prelude::FavoritePeople::find(),
            entity::favorite_people::Column::UserId,
            user_id,
        )
        .order_by_asc(entity::favorite_people::Column::Id)
        .all(self.db)
        .await?;

        let planet_rows = filter_user(
            entity::prelude::FavoritePlanet::find(),
            entity::favorite_planet::Column::UserId,
            user_id,
        )
        .order_by_asc(entity::favorite_planet::Column::Id)
        .all(self.db)
        .await?;

        let vehicle_rows = filter_user(
            entity::prelude::FavoriteVehicle::find(),
            entity::favorite_vehicle::Column::UserId,
            user_id,
        )
        .order_by_asc(entity::favorite_vehicle::Column::Id)
        .all(self.db)
        .await?;

        let user_ids: HashSet<i32> = people_rows
            .iter()
            .map(|f| f.user_id)
            .chain(planet_rows.iter().map(|f| f.user_id))
            .chain(vehicle_rows.iter().map(|f| f.user_id))
            .collect();
        let emails = self.user_emails(user_ids).await?;

        let people_ids: Vec<i32> = people_rows.iter().map(|f| f.people_id).collect();
        let people_map: HashMap<i32, entity::people::Model> = entity::prelude::People::find()
            .filter(entity::people::Column::Id.is_in(people_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let planet_ids: Vec<i32> = planet_rows.iter().map(|f| f.planet_id).collect();
        let planet_map: HashMap<i32, entity::planet::Model> = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let vehicle_ids: Vec<i32> = vehicle_rows.iter().map(|f| f.vehicle_id).collect();
        let vehicle_map: HashMap<i32, entity::vehicle::Model> = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.is_in(vehicle_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let people = people_rows
            .into_iter()
            .filter_map(|f| {
                Some(FavoritePeople {
                    id: f.id,
                    user_email: emails.get(&f.user_id)?.clone(),
                    people: People::from_entity(people_map.get(&f.people_id)?.clone()),
                })
            })
            .collect();

        let planets = planet_rows
            .into_iter()
            .filter_map(|f| {
                Some(FavoritePlanet {
                    id: f.id,
                    user_email: emails.get(&f.user_id)?.clone(),
                    planet: Planet::from_entity(planet_map.get(&f.planet_id)?.clone()),
                })
            })
            .collect();

        let vehicles = vehicle_rows
            .into_iter()
            .filter_map(|f| {
                Some(FavoriteVehicle {
                    id: f.id,
                    user_email: emails.get(&f.user_id)?.clone(),
                    vehicle: Vehicle::from_entity(vehicle_map.get(&f.vehicle_id)?.clone()),
                })
            })
            .collect();

        Ok(Favorites {
            people,
            planets,
            vehicles,
        })
    }

    /// Links a user to a catalog item of the given kind and returns the new row id.
    ///
    /// Duplicate links are allowed.
    pub async fn create(&self, kind: FavoriteKind, user_id: i32, item_id: i32) -> Result<i32, DbErr> {
        let id = match kind {
            FavoriteKind::People => {
                entity::favorite_people::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    people_id: ActiveValue::Set(item_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
            FavoriteKind::Planet => {
                entity::favorite_planet::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    planet_id: ActiveValue::Set(item_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
            FavoriteKind::Vehicle => {
                entity::favorite_vehicle::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    vehicle_id: ActiveValue::Set(item_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
        };

        Ok(id)
    }

    /// Checks whether a favorite row with this id exists in the table for `kind`.
    pub async fn exists(&self, kind: FavoriteKind, id: i32) -> Result<bool, DbErr> {
        let found = match kind {
            FavoriteKind::People => entity::prelude::FavoritePeople::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteKind::Planet => entity::prelude::FavoritePlanet::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteKind::Vehicle => entity::prelude::FavoriteVehicle::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(found)
    }

    /// Checks whether the catalog item a favorite of `kind` would point at exists.
    pub async fn item_exists(&self, kind: FavoriteKind, item_id: i32) -> Result<bool, DbErr> {
        let found = match kind {
            FavoriteKind::People => entity::prelude::People::find_by_id(item_id)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteKind::Planet => entity::prelude::Planet::find_by_id(item_id)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteKind::Vehicle => entity::prelude::Vehicle::find_by_id(item_id)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(found)
    }

    pub async fn delete(&self, kind: FavoriteKind, id: i32) -> Result<u64, DbErr> {
        let result = match kind {
            FavoriteKind::People => {
                entity::prelude::FavoritePeople::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Vehicle => {
                entity::prelude::FavoriteVehicle::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    async fn user_emails(&self, user_ids: HashSet<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.email)).collect())
    }
}

fn filter_user<E, C>(select: Select<E>, column: C, user_id: Option<i32>) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    match user_id {
        Some(user_id) => select.filter(column.eq(user_id)),
        None => select,
    }
}
