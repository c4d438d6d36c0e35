use chrono::Utc;
use entity::day::{self, Entity as Day};
use entity::exercise_detail::{self, Entity as ExerciseDetail};
use entity::routine::{
    self, ActiveModel as RoutineActive, Entity as Routine, Model as RoutineModel,
};
use entity::user;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    RelationTrait, Set, TransactionTrait,
};

use crate::db::{fetch_slice, service::DbService};
use crate::types::error::AppError;
use crate::types::page::{PageRequest, Slice};
use crate::types::routine::{AuthorScope, RoutineCreate};

impl DbService {
    pub async fn get_routine(&self, routine_id: i64) -> Result<RoutineModel, AppError> {
        Routine::find_by_id(routine_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFoundRoutine)
    }

    /// Feed query. A missing division matches every division; the scope
    /// narrows authorship. Results are newest-first (id descending) so pages
    /// are stable under concurrent inserts at the tail.
    pub async fn find_routines(
        &self,
        division: Option<i32>,
        scope: &AuthorScope,
        page: &PageRequest,
    ) -> Result<Slice<RoutineModel>, AppError> {
        let query = Routine::find()
            .apply_if(division, |q, d| q.filter(routine::Column::Division.eq(d)));

        let query = match scope {
            AuthorScope::Any => query,
            AuthorScope::Nickname(nickname) => query
                .join(JoinType::InnerJoin, routine::Relation::User.def())
                .filter(user::Column::Nickname.eq(nickname.as_str())),
            AuthorScope::Emails(emails) => {
                // An empty follow list legitimately selects nothing.
                query.filter(routine::Column::UserEmail.is_in(emails.iter().map(String::as_str)))
            }
        };

        Ok(fetch_slice(
            query.order_by_desc(routine::Column::Id),
            page,
            &self.database_connection,
        )
        .await?)
    }

    /// Insert the routine with its days and exercise details in one
    /// transaction; the author must exist before anything is written.
    pub async fn create_routine(
        &self,
        author_email: &str,
        draft: RoutineCreate,
    ) -> Result<i64, AppError> {
        self.get_user_by_email(author_email).await?;
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let routine_id = Routine::insert(RoutineActive {
            user_email: Set(author_email.to_owned()),
            title: Set(draft.title),
            content: Set(draft.content),
            duration: Set(draft.duration),
            division: Set(draft.division),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&txn)
        .await?
        .last_insert_id;

        for day_draft in draft.days {
            let day_id = Day::insert(day::ActiveModel {
                routine_id: Set(routine_id),
                day_number: Set(day_draft.day_number),
                ..Default::default()
            })
            .exec(&txn)
            .await?
            .last_insert_id;

            for exercise in day_draft.exercises {
                ExerciseDetail::insert(exercise_detail::ActiveModel {
                    day_id: Set(day_id),
                    exercise_name: Set(exercise.exercise_name),
                    set_count: Set(exercise.set_count),
                    repetition_count: Set(exercise.repetition_count),
                    ..Default::default()
                })
                .exec(&txn)
                .await?;
            }
        }

        txn.commit().await?;
        Ok(routine_id)
    }

    pub async fn get_routine_detail(
        &self,
        routine_id: i64,
    ) -> Result<(RoutineModel, Vec<(day::Model, Vec<exercise_detail::Model>)>), AppError> {
        let routine = self.get_routine(routine_id).await?;
        let days = Day::find()
            .filter(day::Column::RoutineId.eq(routine_id))
            .order_by_asc(day::Column::DayNumber)
            .find_with_related(ExerciseDetail)
            .all(&self.database_connection)
            .await?;
        Ok((routine, days))
    }

    /// Only the author may delete. Days, exercise details, likes and scraps
    /// cascade with the routine.
    pub async fn delete_routine(
        &self,
        routine_id: i64,
        caller_email: &str,
    ) -> Result<(), AppError> {
        let routine = self.get_routine(routine_id).await?;
        if routine.user_email != caller_email {
            return Err(AppError::Forbidden);
        }
        Routine::delete_by_id(routine_id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }
}
