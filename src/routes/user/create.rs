use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserCreate;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<entity::user::Model> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let user = db.add_user(name).await?;
    Ok(ApiResponse::Created(user))
}
