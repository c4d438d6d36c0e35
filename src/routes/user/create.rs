use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{UserCreate, UserCreateRes};

#[post("")]
async fn create(
    db: web::Data<Arc<DbService>>,
    body: web::Json<UserCreate>,
) -> ApiResult<UserCreateRes> {
    let payload = body.into_inner();
    let res = UserCreateRes {
        email: payload.email.clone(),
        nickname: payload.nickname.clone(),
    };

    db.create_user(payload).await?;

    Ok(ApiResponse::Created(res))
}
