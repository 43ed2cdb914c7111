use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::movie::Entity as Movie;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl DatabaseService {
    pub async fn user_exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Name.eq(name))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    pub async fn add_user(&self, name: &str) -> Result<UserModel, AppError> {
        if self.user_exists_by_name(name).await? {
            return Err(AppError::DuplicateName);
        }
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = UserActive {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Removes the user and every movie they own. Missing ids are a no-op,
    /// so callers can treat delete as idempotent.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Movie::delete_many()
            .filter(entity::movie::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        User::delete_by_id(user_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
