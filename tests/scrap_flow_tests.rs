// Scrap (bookmark) collection: toggles, id sets, counts, cascade cleanup.


use gymfeed::types::error::AppError;
use test_common::{page, TestContext};

#[tokio::test]
async fn finds_scrapped_routines_by_email() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine1 = ctx.create_routine("author@test.com", 3).await;
    let routine2 = ctx.create_routine("author@test.com", 3).await;

    ctx.db.scrap_routine(routine1, "reader@test.com").await.unwrap();
    ctx.db.scrap_routine(routine2, "reader@test.com").await.unwrap();

    let routines = ctx
        .db
        .routines_scrapped_by_email("reader@test.com", &page(10))
        .await
        .unwrap();
    assert_eq!(routines.len(), 2);
}

#[tokio::test]
async fn unknown_email_yields_an_empty_slice() {
    let ctx = TestContext::new().await;

    let routines = ctx
        .db
        .routines_scrapped_by_email("nobody@test.com", &page(10))
        .await
        .unwrap();

    assert!(routines.is_empty());
    assert!(!routines.has_next);
}

#[tokio::test]
async fn counts_scraps_per_routine() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine1 = ctx.create_routine("author@test.com", 3).await;
    let routine2 = ctx.create_routine("author@test.com", 3).await;

    ctx.db.scrap_routine(routine1, "reader@test.com").await.unwrap();
    ctx.db.scrap_routine(routine2, "reader@test.com").await.unwrap();

    assert_eq!(ctx.db.count_scraps(routine1).await.unwrap(), 1);
    assert_eq!(ctx.db.count_scraps(routine2).await.unwrap(), 1);
}

#[tokio::test]
async fn unscrapped_routine_counts_zero() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    assert_eq!(ctx.db.count_scraps(routine_id).await.unwrap(), 0);
}

#[tokio::test]
async fn scrapped_ids_by_email_returns_the_full_set() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine1 = ctx.create_routine("author@test.com", 3).await;
    let routine2 = ctx.create_routine("author@test.com", 3).await;

    ctx.db.scrap_routine(routine1, "reader@test.com").await.unwrap();
    ctx.db.scrap_routine(routine2, "reader@test.com").await.unwrap();

    let ids = ctx
        .db
        .scrapped_routine_ids_by_email("reader@test.com")
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&routine1));
    assert!(ids.contains(&routine2));
}

#[tokio::test]
async fn scrapped_ids_by_email_is_empty_without_scraps() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;

    let ids = ctx
        .db
        .scrapped_routine_ids_by_email("reader@test.com")
        .await
        .unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn scrapped_ids_by_nickname_returns_the_full_set() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine1 = ctx.create_routine("author@test.com", 3).await;
    let routine2 = ctx.create_routine("author@test.com", 3).await;

    ctx.db.scrap_routine(routine1, "reader@test.com").await.unwrap();
    ctx.db.scrap_routine(routine2, "reader@test.com").await.unwrap();

    let ids = ctx
        .db
        .scrapped_routine_ids_by_nickname("reader")
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&routine1));
    assert!(ids.contains(&routine2));
}

#[tokio::test]
async fn scrapped_ids_by_nickname_is_empty_without_scraps() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;

    let ids = ctx
        .db
        .scrapped_routine_ids_by_nickname("reader")
        .await
        .unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn is_scrapped_reflects_collection_membership() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    assert!(!ctx.db.is_scrapped("reader@test.com", routine_id).await.unwrap());

    ctx.db.scrap_routine(routine_id, "reader@test.com").await.unwrap();
    assert!(ctx.db.is_scrapped("reader@test.com", routine_id).await.unwrap());
}

#[tokio::test]
async fn repeated_scraps_converge_to_one_row() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    assert_eq!(ctx.db.scrap_routine(routine_id, "reader@test.com").await.unwrap(), 1);
    assert_eq!(ctx.db.scrap_routine(routine_id, "reader@test.com").await.unwrap(), 1);
}

#[tokio::test]
async fn unscrap_without_a_scrap_is_a_noop() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    let count = ctx
        .db
        .unscrap_routine(routine_id, "reader@test.com")
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn scrap_then_unscrap_round_trips() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    assert_eq!(ctx.db.scrap_routine(routine_id, "reader@test.com").await.unwrap(), 1);
    assert_eq!(ctx.db.unscrap_routine(routine_id, "reader@test.com").await.unwrap(), 0);
    assert!(!ctx.db.is_scrapped("reader@test.com", routine_id).await.unwrap());
}

#[tokio::test]
async fn scrapping_a_missing_routine_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;

    let err = ctx
        .db
        .scrap_routine(9999, "reader@test.com")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFoundRoutine));
}

#[tokio::test]
async fn scrapping_as_an_unknown_user_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    let err = ctx
        .db
        .scrap_routine(routine_id, "ghost@test.com")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFoundUser));
}

#[tokio::test]
async fn deleting_a_user_removes_their_scraps() {
    let ctx = TestContext::new().await;
    ctx.create_user("reader@test.com", "reader").await;
    ctx.create_user("author@test.com", "author").await;
    let routine_id = ctx.create_routine("author@test.com", 3).await;

    ctx.db.scrap_routine(routine_id, "reader@test.com").await.unwrap();
    assert_eq!(ctx.db.count_scraps(routine_id).await.unwrap(), 1);

    ctx.db.delete_user("reader@test.com").await.unwrap();
    assert_eq!(ctx.db.count_scraps(routine_id).await.unwrap(), 0);
}
