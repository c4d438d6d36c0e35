// Like/unlike toggle semantics: idempotence, round trips, error kinds.


use gymfeed::types::error::AppError;
use test_common::TestContext;

#[tokio::test]
async fn like_increments_the_count() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    ctx.create_user("fan@test.com", "fan").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    assert_eq!(ctx.db.count_likes(routine_id).await.unwrap(), 0);

    let count = ctx.db.like_routine(routine_id, "fan@test.com").await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn repeated_likes_converge_to_one_row() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    ctx.create_user("fan@test.com", "fan").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    let first = ctx.db.like_routine(routine_id, "fan@test.com").await.unwrap();
    let second = ctx.db.like_routine(routine_id, "fan@test.com").await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 1);
    assert_eq!(ctx.db.count_likes(routine_id).await.unwrap(), 1);
}

#[tokio::test]
async fn unlike_without_a_like_is_a_noop() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    ctx.create_user("fan@test.com", "fan").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    let count = ctx
        .db
        .unlike_routine(routine_id, "fan@test.com")
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn like_then_unlike_round_trips_the_count() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    ctx.create_user("fan@test.com", "fan").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    assert_eq!(ctx.db.like_routine(routine_id, "fan@test.com").await.unwrap(), 1);
    assert_eq!(ctx.db.unlike_routine(routine_id, "fan@test.com").await.unwrap(), 0);
    assert_eq!(ctx.db.count_likes(routine_id).await.unwrap(), 0);
}

#[tokio::test]
async fn likes_from_distinct_users_accumulate() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    ctx.create_user("fan1@test.com", "fan1").await;
    ctx.create_user("fan2@test.com", "fan2").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    ctx.db.like_routine(routine_id, "fan1@test.com").await.unwrap();
    let count = ctx.db.like_routine(routine_id, "fan2@test.com").await.unwrap();
    assert_eq!(count, 2);

    let count = ctx
        .db
        .unlike_routine(routine_id, "fan1@test.com")
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn liking_a_missing_routine_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.create_user("fan@test.com", "fan").await;

    let err = ctx.db.like_routine(9999, "fan@test.com").await.unwrap_err();
    assert!(matches!(err, AppError::NotFoundRoutine));
}

#[tokio::test]
async fn liking_as_an_unknown_user_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    let err = ctx
        .db
        .like_routine(routine_id, "ghost@test.com")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFoundUser));
}

#[tokio::test]
async fn deleting_a_routine_drops_its_likes() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    ctx.create_user("fan@test.com", "fan").await;
    let routine_id = ctx.create_routine("author@test.com", 1).await;

    ctx.db.like_routine(routine_id, "fan@test.com").await.unwrap();
    ctx.db
        .delete_routine(routine_id, "author@test.com")
        .await
        .unwrap();

    assert_eq!(ctx.db.count_likes(routine_id).await.unwrap(), 0);
}
