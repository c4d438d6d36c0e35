use actix_web::{delete, post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

#[post("/{nickname}/follow")]
async fn follow(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<String>,
) -> ApiResult<()> {
    let followee = db.get_user_by_nickname(&path.into_inner()).await?;
    db.follow(&identity.email, &followee.email).await?;
    Ok(ApiResponse::NoContent)
}

#[delete("/{nickname}/follow")]
async fn unfollow(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<String>,
) -> ApiResult<()> {
    let followee = db.get_user_by_nickname(&path.into_inner()).await?;
    db.unfollow(&identity.email, &followee.email).await?;
    Ok(ApiResponse::NoContent)
}
