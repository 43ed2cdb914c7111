pub mod database_service;
pub mod movie;
pub mod user;

use crate::types::error::AppError;
use crate::types::movie::{DBMovieCreate, DBMovieUpdate};
use database_service::DatabaseService;

/// The persistence operations the HTTP layer programs against. One concrete
/// implementation exists, backed by the relational store; tests may also talk
/// to it through a trait object.
#[async_trait::async_trait]
pub trait DataManager {
    async fn add_user(&self, name: &str) -> Result<entity::user::Model, AppError>;
    async fn delete_user(&self, user_id: i32) -> Result<(), AppError>;
    async fn list_users(&self) -> Result<Vec<entity::user::Model>, AppError>;
    async fn add_movie(
        &self,
        user_id: i32,
        movie: DBMovieCreate,
    ) -> Result<entity::movie::Model, AppError>;
    async fn get_user_movies(&self, user_id: i32) -> Result<Vec<entity::movie::Model>, AppError>;
    async fn get_movie_by_id(&self, movie_id: i32)
        -> Result<Option<entity::movie::Model>, AppError>;
    async fn update_movie(&self, movie: DBMovieUpdate) -> Result<entity::movie::Model, AppError>;
    async fn delete_movie(&self, movie_id: i32, user_id: i32) -> Result<(), AppError>;
}

#[async_trait::async_trait]
impl DataManager for DatabaseService {
    async fn add_user(&self, name: &str) -> Result<entity::user::Model, AppError> {
        DatabaseService::add_user(self, name).await
    }

    async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        DatabaseService::delete_user(self, user_id).await
    }

    async fn list_users(&self) -> Result<Vec<entity::user::Model>, AppError> {
        DatabaseService::list_users(self).await
    }

    async fn add_movie(
        &self,
        user_id: i32,
        movie: DBMovieCreate,
    ) -> Result<entity::movie::Model, AppError> {
        DatabaseService::add_movie(self, user_id, movie).await
    }

    async fn get_user_movies(&self, user_id: i32) -> Result<Vec<entity::movie::Model>, AppError> {
        DatabaseService::get_user_movies(self, user_id).await
    }

    async fn get_movie_by_id(
        &self,
        movie_id: i32,
    ) -> Result<Option<entity::movie::Model>, AppError> {
        DatabaseService::get_movie_by_id(self, movie_id).await
    }

    async fn update_movie(&self, movie: DBMovieUpdate) -> Result<entity::movie::Model, AppError> {
        DatabaseService::update_movie(self, movie).await
    }

    async fn delete_movie(&self, movie_id: i32, user_id: i32) -> Result<(), AppError> {
        DatabaseService::delete_movie(self, movie_id, user_id).await
    }
}
