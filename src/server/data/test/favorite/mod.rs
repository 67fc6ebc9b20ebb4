use crate::{model::favorite::FavoriteKind, server::data::favorite::FavoriteRepository};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
