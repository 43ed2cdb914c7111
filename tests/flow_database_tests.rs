mod common;

use common::{test_data, TestContext};
use moviweb::db::DataManager;
use moviweb::types::error::AppError;
use moviweb::types::movie::DBMovieCreate;

#[tokio::test]
async fn test_add_user_twice_fails_with_duplicate_name() {
    let ctx = TestContext::new().await;

    ctx.db.add_user("Frank").await.expect("First add failed");
    let err = ctx.db.add_user("Frank").await.unwrap_err();

    assert!(matches!(err, AppError::DuplicateName));
}

#[tokio::test]
async fn test_delete_nonexistent_user_leaves_state_unchanged() {
    let ctx = TestContext::new().await;

    ctx.db.add_user("TestUser1").await.expect("Add failed");
    ctx.db.delete_user(999).await.expect("Delete should be a no-op");

    let users = ctx.db.list_users().await.expect("List failed");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "TestUser1");
}

#[tokio::test]
async fn test_delete_nonexistent_movie_leaves_state_unchanged() {
    let ctx = TestContext::new().await;

    let user = ctx.db.add_user("TestUser").await.expect("Add failed");
    ctx.db
        .add_movie(user.id, test_data::titanic())
        .await
        .expect("Add movie failed");

    ctx.db
        .delete_movie(999, user.id)
        .await
        .expect("Delete should be a no-op");

    let movies = ctx.db.get_user_movies(user.id).await.expect("Query failed");
    assert_eq!(movies.len(), 1);
}

#[tokio::test]
async fn test_add_movie_round_trip_preserves_fields() {
    let ctx = TestContext::new().await;

    let user = ctx.db.add_user("TestUser1").await.expect("Add failed");
    let created = ctx
        .db
        .add_movie(user.id, test_data::titanic())
        .await
        .expect("Add movie failed");

    let movie = ctx
        .db
        .get_movie_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("Movie should exist");

    assert_eq!(movie.title, "Titanic");
    assert_eq!(movie.director, "Di Caprio");
    assert_eq!(movie.year, 1997);
    assert_eq!(movie.rating, 9.9);
    assert_eq!(movie.user_id, user.id);
}

#[tokio::test]
async fn test_add_movie_for_missing_user_is_fk_violation() {
    let ctx = TestContext::new().await;

    let err = ctx.db.add_movie(999, test_data::titanic()).await.unwrap_err();
    assert!(matches!(err, AppError::ForeignKeyViolation));
}

#[tokio::test]
async fn test_title_uniqueness_is_scoped_per_user() {
    let ctx = TestContext::new().await;

    let first = ctx.db.add_user("First").await.expect("Add failed");
    let second = ctx.db.add_user("Second").await.expect("Add failed");

    ctx.db
        .add_movie(first.id, test_data::titanic())
        .await
        .expect("First copy should be accepted");

    // Same user, same title: conflict
    let err = ctx
        .db
        .add_movie(first.id, test_data::titanic())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateTitle));

    // Different user, same title: fine
    ctx.db
        .add_movie(second.id, test_data::titanic())
        .await
        .expect("Other user's copy should be accepted");
}

#[tokio::test]
async fn test_deleting_user_cascades_to_their_movies() {
    let ctx = TestContext::new().await;

    let user = ctx.db.add_user("TestUser1").await.expect("Add failed");
    ctx.db
        .add_movie(user.id, test_data::titanic())
        .await
        .expect("Add movie failed");
    ctx.db
        .add_movie(
            user.id,
            DBMovieCreate {
                title: "22 Jump Street".to_string(),
                director: "De Niro".to_string(),
                year: 2010,
                rating: 9.2,
            },
        )
        .await
        .expect("Add movie failed");

    ctx.db.delete_user(user.id).await.expect("Delete failed");

    let movies = ctx.db.get_user_movies(user.id).await.expect("Query failed");
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_deleting_last_movie_keeps_the_user() {
    let ctx = TestContext::new().await;

    let user = ctx.db.add_user("Keeper").await.expect("Add failed");
    let movie = ctx
        .db
        .add_movie(user.id, test_data::titanic())
        .await
        .expect("Add movie failed");

    ctx.db
        .delete_movie(movie.id, user.id)
        .await
        .expect("Delete failed");

    assert!(ctx
        .db
        .get_user_by_id(user.id)
        .await
        .expect("Query failed")
        .is_some());
    assert!(ctx
        .db
        .get_user_movies(user.id)
        .await
        .expect("Query failed")
        .is_empty());
}

#[tokio::test]
async fn test_user_with_no_movies_yields_empty_collection() {
    let ctx = TestContext::new().await;

    let user = ctx.db.add_user("Empty").await.expect("Add failed");
    let movies = ctx.db.get_user_movies(user.id).await.expect("Query failed");

    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_operations_work_through_the_trait_object() {
    let ctx = TestContext::new().await;
    let manager: &dyn DataManager = ctx.db.as_ref();

    let user = manager.add_user("Via Trait").await.expect("Add failed");
    manager
        .add_movie(user.id, test_data::titanic())
        .await
        .expect("Add movie failed");

    let movies = manager
        .get_user_movies(user.id)
        .await
        .expect("Query failed");
    assert_eq!(movies.len(), 1);

    manager.delete_user(user.id).await.expect("Delete failed");
    assert!(manager
        .get_user_movies(user.id)
        .await
        .expect("Query failed")
        .is_empty());
}
