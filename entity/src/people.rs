use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_people::Entity")]
    FavoritePeople,
}

impl Related<super::favorite_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePeople.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
