use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::{DBMovieCreate, DBMovieUpdate};
use crate::utils::validate::validate_movie_fields;
use chrono::Utc;
use entity::movie::{ActiveModel as MovieActive, Entity as Movie, Model as MovieModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl DatabaseService {
    pub async fn movie_title_taken(&self, user_id: i32, title: &str) -> Result<bool, AppError> {
        Ok(Movie::find()
            .filter(entity::movie::Column::UserId.eq(user_id))
            .filter(entity::movie::Column::Title.eq(title))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn add_movie(
        &self,
        user_id: i32,
        movie: DBMovieCreate,
    ) -> Result<MovieModel, AppError> {
        validate_movie_fields(movie.year, movie.rating, self.rating_policy)?;

        if self.get_user_by_id(user_id).await?.is_none() {
            return Err(AppError::ForeignKeyViolation);
        }
        if self.movie_title_taken(user_id, &movie.title).await? {
            return Err(AppError::DuplicateTitle);
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let created = MovieActive {
            user_id: Set(user_id),
            title: Set(movie.title),
            director: Set(movie.director),
            year: Set(movie.year),
            rating: Set(movie.rating),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created)
    }

    pub async fn get_user_movies(&self, user_id: i32) -> Result<Vec<MovieModel>, AppError> {
        Ok(Movie::find()
            .filter(entity::movie::Column::UserId.eq(user_id))
            .order_by_asc(entity::movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get_movie_by_id(&self, movie_id: i32) -> Result<Option<MovieModel>, AppError> {
        Ok(Movie::find_by_id(movie_id).one(&self.db).await?)
    }

    /// Validates the incoming fields before anything is read or written, then
    /// overwrites the stored row.
    pub async fn update_movie(&self, movie: DBMovieUpdate) -> Result<MovieModel, AppError> {
        validate_movie_fields(movie.year, movie.rating, self.rating_policy)?;

        let current = Movie::find_by_id(movie.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        if movie.title != current.title
            && self.movie_title_taken(current.user_id, &movie.title).await?
        {
            return Err(AppError::DuplicateTitle);
        }

        let mut am: MovieActive = current.into();
        am.title = Set(movie.title);
        am.director = Set(movie.director);
        am.year = Set(movie.year);
        am.rating = Set(movie.rating);
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.db).await?)
    }

    /// Scoped to the owning user; deleting a movie that is not there is a
    /// no-op. The owning user stays even when their last movie goes.
    pub async fn delete_movie(&self, movie_id: i32, user_id: i32) -> Result<(), AppError> {
        Movie::delete_many()
            .filter(entity::movie::Column::Id.eq(movie_id))
            .filter(entity::movie::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
