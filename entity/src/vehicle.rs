use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub length: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed: Option<f64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_vehicle::Entity")]
    FavoriteVehicle,
}

impl Related<super::favorite_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
