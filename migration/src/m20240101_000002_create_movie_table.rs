use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Movies::UserId)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Movies::Title)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Movies::Director)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Movies::Year)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Movies::Rating)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Movies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_user_id")
                            .from(Movies::Table, Movies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        // Title uniqueness is scoped to the owning user.
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_user_id_title")
                    .table(Movies::Table)
                    .col(Movies::UserId)
                    .col(Movies::Title)
                    .unique()
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Movies::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    UserId,
    Title,
    Director,
    Year,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
