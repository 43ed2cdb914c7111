use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::{DBMovieCreate, RMovieCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::omdb::OmdbClient;
use actix_web::{post, web};
use std::sync::Arc;

#[post("/{user_id}/movies")]
async fn create(
    db: web::Data<Arc<DatabaseService>>,
    omdb: web::Data<OmdbClient>,
    path: web::Path<i32>,
    body: web::Json<RMovieCreate>,
) -> ApiResult<entity::movie::Model> {
    let user_id = path.into_inner();
    let body = body.into_inner();

    if body.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    let movie = resolve_fields(&omdb, body).await?;
    let created = db.add_movie(user_id, movie).await?;
    Ok(ApiResponse::Created(created))
}

/// Fills in whichever of director/year/rating the caller left out from the
/// OMDb lookup. No request leaves the process when the caller supplied all
/// three.
async fn resolve_fields(
    omdb: &OmdbClient,
    body: RMovieCreate,
) -> Result<DBMovieCreate, AppError> {
    if let (Some(director), Some(year), Some(rating)) =
        (body.director.clone(), body.year, body.rating)
    {
        return Ok(DBMovieCreate {
            title: body.title,
            director,
            year,
            rating,
        });
    }

    let found = omdb.fetch(&body.title).await?;

    let director = body.director.or_else(|| found.as_ref().and_then(|m| m.director.clone()));
    let year = body.year.or_else(|| found.as_ref().and_then(|m| m.year));
    let rating = body.rating.or_else(|| found.as_ref().and_then(|m| m.rating));

    match (director, year, rating) {
        (Some(director), Some(year), Some(rating)) => Ok(DBMovieCreate {
            title: body.title,
            director,
            year,
            rating,
        }),
        _ => Err(AppError::BadRequest(
            "lookup could not fill the missing fields; supply director, year and rating"
                .to_string(),
        )),
    }
}
