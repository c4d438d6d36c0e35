use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::routine::{RoutineCreate, RoutineCreateRes};
use crate::utils::webutils::Identity;

#[post("")]
async fn create(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RoutineCreate>,
) -> ApiResult<RoutineCreateRes> {
    let id = db
        .create_routine(&identity.email, body.into_inner())
        .await?;
    Ok(ApiResponse::Created(RoutineCreateRes { id }))
}
