use crate::db::database_service::DatabaseService;
use crate::types::movie::{DBMovieUpdate, RMovieUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{movie_id}")]
async fn update(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<RMovieUpdate>,
) -> ApiResult<entity::movie::Model> {
    let movie_id = path.into_inner();
    let body = body.into_inner();

    let updated = db
        .update_movie(DBMovieUpdate {
            id: movie_id,
            title: body.title,
            director: body.director,
            year: body.year,
            rating: body.rating,
        })
        .await?;
    Ok(ApiResponse::Ok(updated))
}
