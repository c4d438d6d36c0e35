use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::page::PageRequest;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::routine::{AuthorScope, RoutineListQuery, RoutineSliceRes};
use crate::utils::webutils::Identity;

#[get("")]
async fn list(
    db: web::Data<Arc<DbService>>,
    query: web::Query<RoutineListQuery>,
) -> ApiResult<RoutineSliceRes> {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.size);
    let scope = match query.author {
        Some(nickname) => AuthorScope::Nickname(nickname),
        None => AuthorScope::Any,
    };

    let slice = db.find_routines(query.division, &scope, &page).await?;
    Ok(ApiResponse::Ok(slice.into()))
}

/// Feed restricted to authors the caller follows. An empty follow list is an
/// empty feed, not an error.
#[get("/following")]
async fn following(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    query: web::Query<RoutineListQuery>,
) -> ApiResult<RoutineSliceRes> {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.size);
    let emails = db.followed_emails(&identity.email).await?;

    let slice = db
        .find_routines(query.division, &AuthorScope::Emails(emails), &page)
        .await?;
    Ok(ApiResponse::Ok(slice.into()))
}
