use chrono::Utc;
use entity::user::{self, ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::user::UserCreate;

impl DbService {
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        User::find_by_id(email.to_owned())
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFoundUser)
    }

    pub async fn get_user_by_nickname(&self, nickname: &str) -> Result<UserModel, AppError> {
        User::find()
            .filter(user::Column::Nickname.eq(nickname))
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFoundUser)
    }

    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find_by_id(email.to_owned())
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Signup: email and nickname must both be free.
    pub async fn create_user(&self, payload: UserCreate) -> Result<(), AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }

        let result = User::insert(UserActive {
            email: Set(payload.email),
            nickname: Set(payload.nickname),
            role: Set(user::ROLE_USER.to_owned()),
            created_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                _ => Err(err.into()),
            },
        }
    }

    /// Likes, scraps, follow edges and authored routines go with the user via
    /// cascading foreign keys; nothing is cleaned up in application code.
    pub async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let res = User::delete_by_id(email.to_owned())
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFoundUser);
        }
        Ok(())
    }
}
