use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::routine::RoutineDetailRes;

#[get("/{routine_id}")]
async fn detail(db: web::Data<Arc<DbService>>, path: web::Path<i64>) -> ApiResult<RoutineDetailRes> {
    let (routine, days) = db.get_routine_detail(path.into_inner()).await?;
    Ok(ApiResponse::Ok(RoutineDetailRes::from_parts(routine, days)))
}
