use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string, never the plaintext password.
    pub password: String,
    pub is_active: bool,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_people::Entity")]
    FavoritePeople,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
    #[sea_orm(has_many = "super::favorite_vehicle::Entity")]
    FavoriteVehicle,
}

impl Related<super::favorite_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePeople.def()
    }
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl Related<super::favorite_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
