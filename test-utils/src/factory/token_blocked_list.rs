//! Factory for denylist rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records `jti` as revoked now.
pub async fn create_blocked_token(
    db: &DatabaseConnection,
    jti: impl Into<String>,
) -> Result<entity::token_blocked_list::Model, DbErr> {
    entity::token_blocked_list::ActiveModel {
        jti: ActiveValue::Set(jti.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
