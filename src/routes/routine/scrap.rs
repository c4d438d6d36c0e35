use actix_web::{delete, get, post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::page::PageRequest;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::routine::{RoutineListQuery, RoutineSliceRes, ScrapCountRes};
use crate::utils::webutils::Identity;

#[post("/{routine_id}/scrap")]
async fn scrap(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i64>,
) -> ApiResult<ScrapCountRes> {
    let scrap_count = db.scrap_routine(path.into_inner(), &identity.email).await?;
    Ok(ApiResponse::Ok(ScrapCountRes { scrap_count }))
}

#[delete("/{routine_id}/scrap")]
async fn unscrap(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i64>,
) -> ApiResult<ScrapCountRes> {
    let scrap_count = db
        .unscrap_routine(path.into_inner(), &identity.email)
        .await?;
    Ok(ApiResponse::Ok(ScrapCountRes { scrap_count }))
}

/// The caller's personal collection, paged like the main feed.
#[get("/scraps")]
async fn scrapped(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    query: web::Query<RoutineListQuery>,
) -> ApiResult<RoutineSliceRes> {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.size);

    let slice = db
        .routines_scrapped_by_email(&identity.email, &page)
        .await?;
    Ok(ApiResponse::Ok(slice.into()))
}
