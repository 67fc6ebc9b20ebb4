use crate::server::{
    data::people::PeopleRepository,
    model::people::{CreatePeopleParams, UpdatePeopleParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod update;

fn params(name: &str) -> CreatePeopleParams {
    CreatePeopleParams {
        name: name.to_string(),
        height: Some(183.0),
        mass: None,
        hair_color: Some("black".to_string()),
        skin_color: None,
        eye_color: None,
        birth_year: Some(29),
        gender: None,
        homeworld: None,
    }
}
