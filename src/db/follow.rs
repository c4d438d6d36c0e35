use chrono::Utc;
use entity::follow::{self, ActiveModel as FollowActive, Entity as Follow};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set};

use crate::db::service::DbService;
use crate::types::error::AppError;

impl DbService {
    /// Idempotent follow; both endpoints must exist and self-follows are
    /// rejected.
    pub async fn follow(&self, follower_email: &str, followee_email: &str) -> Result<(), AppError> {
        if follower_email == followee_email {
            return Err(AppError::BadRequest("cannot follow yourself".to_owned()));
        }
        let follower = self.get_user_by_email(follower_email).await?;
        let followee = self.get_user_by_email(followee_email).await?;

        Follow::insert(FollowActive {
            follower_email: Set(follower.email),
            followee_email: Set(followee.email),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                follow::Column::FollowerEmail,
                follow::Column::FolloweeEmail,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.database_connection)
        .await?;
        Ok(())
    }

    /// Deleting by key makes unfollow-without-follow a no-op.
    pub async fn unfollow(
        &self,
        follower_email: &str,
        followee_email: &str,
    ) -> Result<(), AppError> {
        Follow::delete_by_id((follower_email.to_owned(), followee_email.to_owned()))
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    /// Emails of everyone the user follows; feeds the follow-scoped feed.
    pub async fn followed_emails(&self, follower_email: &str) -> Result<Vec<String>, AppError> {
        Ok(Follow::find()
            .filter(follow::Column::FollowerEmail.eq(follower_email))
            .select_only()
            .column(follow::Column::FolloweeEmail)
            .into_tuple()
            .all(&self.database_connection)
            .await?)
    }

    pub async fn is_following(
        &self,
        follower_email: &str,
        followee_email: &str,
    ) -> Result<bool, AppError> {
        Ok(
            Follow::find_by_id((follower_email.to_owned(), followee_email.to_owned()))
                .count(&self.database_connection)
                .await?
                > 0,
        )
    }
}
