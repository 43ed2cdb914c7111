use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{user_id}/movies")]
async fn list(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<entity::movie::Model>> {
    let user_id = path.into_inner();
    let movies = db.get_user_movies(user_id).await?;
    Ok(ApiResponse::Ok(movies))
}
