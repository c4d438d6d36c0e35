use actix_web::{delete, post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::routine::LikeCountRes;
use crate::utils::webutils::Identity;

#[post("/{routine_id}/like")]
async fn like(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i64>,
) -> ApiResult<LikeCountRes> {
    let like_count = db.like_routine(path.into_inner(), &identity.email).await?;
    Ok(ApiResponse::Ok(LikeCountRes { like_count }))
}

#[delete("/{routine_id}/like")]
async fn unlike(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i64>,
) -> ApiResult<LikeCountRes> {
    let like_count = db
        .unlike_routine(path.into_inner(), &identity.email)
        .await?;
    Ok(ApiResponse::Ok(LikeCountRes { like_count }))
}
