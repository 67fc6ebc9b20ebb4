//! Denylist of revoked token identifiers.
//!
//! Rows are only ever appended. A jti recorded here stays revoked for good.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct TokenBlockedListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenBlockedListRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records `jti` as revoked at the current time.
    pub async fn block(&self, jti: &str) -> Result<(), DbErr> {
        entity::token_blocked_list::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_blocked(&self, jti: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::TokenBlockedList::find()
            .filter(entity::token_blocked_list::Column::Jti.eq(jti))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
