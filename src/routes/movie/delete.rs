use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("/{user_id}/movies/{movie_id}")]
async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<()> {
    let (user_id, movie_id) = path.into_inner();
    db.delete_movie(movie_id, user_id).await?;
    Ok(ApiResponse::NoContent)
}
