use chrono::Utc;
use entity::routine_like::{self, ActiveModel as LikeActive, Entity as RoutineLike};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::debug;

use crate::db::service::DbService;
use crate::types::error::AppError;

impl DbService {
    /// Idempotent like. The insert is conflict-ignored against the composite
    /// primary key, so a repeat (or a lost race) means "already liked" rather
    /// than a duplicate row or an error. Returns the committed like count.
    pub async fn like_routine(&self, routine_id: i64, caller_email: &str) -> Result<u64, AppError> {
        let user = self.get_user_by_email(caller_email).await?;
        self.get_routine(routine_id).await?;

        let txn = self.database_connection.begin().await?;

        RoutineLike::insert(LikeActive {
            user_email: Set(user.email),
            routine_id: Set(routine_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                routine_like::Column::UserEmail,
                routine_like::Column::RoutineId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        let like_count = count_likes_on(&txn, routine_id).await?;
        txn.commit().await?;

        debug!(routine_id, like_count, "routine liked");
        Ok(like_count)
    }

    /// Idempotent unlike: the row is deleted by its reconstructed composite
    /// key, so unliking something never liked is a no-op.
    pub async fn unlike_routine(
        &self,
        routine_id: i64,
        caller_email: &str,
    ) -> Result<u64, AppError> {
        let user = self.get_user_by_email(caller_email).await?;
        self.get_routine(routine_id).await?;

        let txn = self.database_connection.begin().await?;

        RoutineLike::delete_by_id((user.email, routine_id))
            .exec(&txn)
            .await?;

        let like_count = count_likes_on(&txn, routine_id).await?;
        txn.commit().await?;

        debug!(routine_id, like_count, "routine unliked");
        Ok(like_count)
    }

    pub async fn count_likes(&self, routine_id: i64) -> Result<u64, AppError> {
        Ok(count_likes_on(&self.database_connection, routine_id).await?)
    }
}

async fn count_likes_on<C: ConnectionTrait>(db: &C, routine_id: i64) -> Result<u64, DbErr> {
    RoutineLike::find()
        .filter(routine_like::Column::RoutineId.eq(routine_id))
        .count(db)
        .await
}
