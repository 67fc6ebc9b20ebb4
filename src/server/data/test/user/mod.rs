use crate::server::{data::user::UserRepository, error::AppError, service::user::insert_error};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod email_exists;
mod find_by_id;
mod set_active;
