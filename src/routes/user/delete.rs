use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("/{user_id}")]
async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    let user_id = path.into_inner();
    db.delete_user(user_id).await?;
    Ok(ApiResponse::NoContent)
}
