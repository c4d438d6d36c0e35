use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

#[delete("/{routine_id}")]
async fn remove(
    identity: Identity,
    db: web::Data<Arc<DbService>>,
    path: web::Path<i64>,
) -> ApiResult<()> {
    db.delete_routine(path.into_inner(), &identity.email).await?;
    Ok(ApiResponse::NoContent)
}
