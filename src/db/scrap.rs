use std::collections::HashSet;

use chrono::Utc;
use entity::routine::{self, Entity as Routine, Model as RoutineModel};
use entity::routine_scrap::{self, ActiveModel as ScrapActive, Entity as RoutineScrap};
use entity::user;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;

use crate::db::{fetch_slice, service::DbService};
use crate::types::error::AppError;
use crate::types::page::{PageRequest, Slice};

impl DbService {
    /// Idempotent scrap (bookmark); same conflict-ignored shape as likes.
    /// Returns how many users have the routine in their collection.
    pub async fn scrap_routine(&self, routine_id: i64, caller_email: &str) -> Result<u64, AppError> {
        let user = self.get_user_by_email(caller_email).await?;
        self.get_routine(routine_id).await?;

        let txn = self.database_connection.begin().await?;

        RoutineScrap::insert(ScrapActive {
            user_email: Set(user.email),
            routine_id: Set(routine_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                routine_scrap::Column::UserEmail,
                routine_scrap::Column::RoutineId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        let scrap_count = count_scraps_on(&txn, routine_id).await?;
        txn.commit().await?;

        debug!(routine_id, scrap_count, "routine scrapped");
        Ok(scrap_count)
    }

    pub async fn unscrap_routine(
        &self,
        routine_id: i64,
        caller_email: &str,
    ) -> Result<u64, AppError> {
        let user = self.get_user_by_email(caller_email).await?;
        self.get_routine(routine_id).await?;

        let txn = self.database_connection.begin().await?;

        RoutineScrap::delete_by_id((user.email, routine_id))
            .exec(&txn)
            .await?;

        let scrap_count = count_scraps_on(&txn, routine_id).await?;
        txn.commit().await?;

        debug!(routine_id, scrap_count, "routine unscrapped");
        Ok(scrap_count)
    }

    /// The routines a user has bookmarked, newest first. Unknown emails yield
    /// an empty slice, not an error.
    pub async fn routines_scrapped_by_email(
        &self,
        email: &str,
        page: &PageRequest,
    ) -> Result<Slice<RoutineModel>, AppError> {
        let query = Routine::find()
            .join_rev(JoinType::InnerJoin, routine_scrap::Relation::Routine.def())
            .filter(routine_scrap::Column::UserEmail.eq(email))
            .order_by_desc(routine::Column::Id);
        Ok(fetch_slice(query, page, &self.database_connection).await?)
    }

    pub async fn scrapped_routine_ids_by_email(
        &self,
        email: &str,
    ) -> Result<HashSet<i64>, AppError> {
        let ids: Vec<i64> = RoutineScrap::find()
            .filter(routine_scrap::Column::UserEmail.eq(email))
            .select_only()
            .column(routine_scrap::Column::RoutineId)
            .into_tuple()
            .all(&self.database_connection)
            .await?;
        Ok(ids.into_iter().collect())
    }

    pub async fn scrapped_routine_ids_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<HashSet<i64>, AppError> {
        let ids: Vec<i64> = RoutineScrap::find()
            .join(JoinType::InnerJoin, routine_scrap::Relation::User.def())
            .filter(user::Column::Nickname.eq(nickname))
            .select_only()
            .column(routine_scrap::Column::RoutineId)
            .into_tuple()
            .all(&self.database_connection)
            .await?;
        Ok(ids.into_iter().collect())
    }

    pub async fn count_scraps(&self, routine_id: i64) -> Result<u64, AppError> {
        Ok(count_scraps_on(&self.database_connection, routine_id).await?)
    }

    pub async fn is_scrapped(&self, email: &str, routine_id: i64) -> Result<bool, AppError> {
        Ok(RoutineScrap::find_by_id((email.to_owned(), routine_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }
}

async fn count_scraps_on<C: ConnectionTrait>(db: &C, routine_id: i64) -> Result<u64, DbErr> {
    RoutineScrap::find()
        .filter(routine_scrap::Column::RoutineId.eq(routine_id))
        .count(db)
        .await
}
