use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<entity::user::Model>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users))
}
