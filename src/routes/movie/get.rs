use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{movie_id}")]
async fn get_movie(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<entity::movie::Model> {
    let movie_id = path.into_inner();
    let movie = db
        .get_movie_by_id(movie_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::Ok(movie))
}
