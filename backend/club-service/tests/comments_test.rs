//! Comment subsystem: target dispatch, ordering, ownership, cascade wiring.
mod common;

use chrono::NaiveDate;
use rand::Rng;
use sqlx::SqlitePool;

use club_service::error::AppError;
use club_service::middleware::AuthUser;
use club_service::models::{CommentTarget, MediaKind, PostCategory};
use club_service::services::{
    AlbumService, CommentService, PostService, ScheduleService, StoredMedia,
};

async fn seed_post(pool: &SqlitePool, author: &AuthUser) -> i64 {
    PostService::new(pool.clone())
        .create(author, PostCategory::Free, "first serve", "who is in?", None)
        .await
        .expect("post")
        .id
}

async fn seed_event(pool: &SqlitePool, author: &AuthUser) -> i64 {
    ScheduleService::new(pool.clone())
        .create(
            author,
            "league match",
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            Some("19:00"),
            Some("city hall courts"),
        )
        .await
        .expect("event")
        .id
}

async fn seed_album_item(pool: &SqlitePool, author: &AuthUser) -> i64 {
    AlbumService::new(pool.clone())
        .create(
            author,
            Some("finals day"),
            &StoredMedia {
                file_name: "1723000000000.jpg".to_string(),
                kind: MediaKind::Image,
            },
        )
        .await
        .expect("album item")
        .id
}

#[tokio::test]
async fn add_then_list_returns_newest_first_for_every_kind() {
    let pool = common::setup_pool().await;
    let author = common::approved_member(&pool, "spinner").await;
    let comments = CommentService::new(pool.clone());

    let targets = [
        CommentTarget::Post(seed_post(&pool, &author).await),
        CommentTarget::Schedule(seed_event(&pool, &author).await),
        CommentTarget::Album(seed_album_item(&pool, &author).await),
    ];

    for target in targets {
        comments
            .add(&author, target, "older comment")
            .await
            .expect("first comment");
        let (newer, location) = comments
            .add(&author, target, "newer comment")
            .await
            .expect("second comment");

        assert_eq!(location, target.location());

        let listed = comments.list(target).await.expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[0].content, "newer comment");
    }
}

#[tokio::test]
async fn unknown_kind_is_rejected_and_persists_nothing() {
    let pool = common::setup_pool().await;
    common::approved_member(&pool, "spinner").await;

    let err = CommentTarget::parse("news", 1).unwrap_err();
    assert!(matches!(err, AppError::InvalidTargetKind(_)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn every_stored_comment_references_exactly_one_parent() {
    let pool = common::setup_pool().await;
    let author = common::approved_member(&pool, "chopper").await;
    let comments = CommentService::new(pool.clone());

    let post_id = seed_post(&pool, &author).await;
    let event_id = seed_event(&pool, &author).await;
    let album_id = seed_album_item(&pool, &author).await;

    let mut rng = rand::thread_rng();
    for i in 0..30 {
        let target = match rng.gen_range(0..3) {
            0 => CommentTarget::Post(post_id),
            1 => CommentTarget::Schedule(event_id),
            _ => CommentTarget::Album(album_id),
        };
        comments
            .add(&author, target, &format!("comment {}", i))
            .await
            .expect("add");
    }

    let reference_counts: Vec<i64> = sqlx::query_scalar(
        "SELECT (post_id IS NOT NULL) + (schedule_id IS NOT NULL) + (album_id IS NOT NULL) FROM comments",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(reference_counts.len(), 30);
    assert!(reference_counts.iter().all(|&count| count == 1));
}

#[tokio::test]
async fn commenting_on_a_missing_parent_is_not_found() {
    let pool = common::setup_pool().await;
    let author = common::approved_member(&pool, "lobber").await;

    let err = CommentService::new(pool.clone())
        .add(&author, CommentTarget::Post(9999), "anyone here?")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn listing_a_missing_parent_is_empty_not_an_error() {
    let pool = common::setup_pool().await;

    let listed = CommentService::new(pool.clone())
        .list(CommentTarget::Album(9999))
        .await
        .expect("list");

    assert!(listed.is_empty());
}

#[tokio::test]
async fn comment_edit_is_owner_or_admin_only() {
    let pool = common::setup_pool().await;
    let author = common::approved_member(&pool, "author").await;
    let other = common::approved_member(&pool, "other").await;
    let admin = common::admin(&pool, "boss").await;
    let comments = CommentService::new(pool.clone());

    let post_id = seed_post(&pool, &author).await;
    let (comment, _) = comments
        .add(&author, CommentTarget::Post(post_id), "original")
        .await
        .unwrap();

    let err = comments
        .update(comment.id, &other, "defaced")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let location = comments
        .update(comment.id, &admin, "moderated")
        .await
        .expect("admin edit");
    assert_eq!(location, format!("/community/post/{}", post_id));

    let updated = comments.get(comment.id).await.unwrap();
    assert_eq!(updated.content, "moderated");
}

#[tokio::test]
async fn comment_delete_redirects_to_parent_and_removes_the_row() {
    let pool = common::setup_pool().await;
    let author = common::approved_member(&pool, "netplay").await;
    let comments = CommentService::new(pool.clone());

    let event_id = seed_event(&pool, &author).await;
    let (comment, _) = comments
        .add(&author, CommentTarget::Schedule(event_id), "count me in")
        .await
        .unwrap();

    let location = comments.delete(comment.id, &author).await.expect("delete");
    assert_eq!(location, format!("/schedule/{}", event_id));

    let err = comments.get(comment.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn missing_comment_reports_not_found_before_permissions() {
    let pool = common::setup_pool().await;
    let nobody = common::approved_member(&pool, "bystander").await;

    let err = CommentService::new(pool.clone())
        .update(4242, &nobody, "ghost edit")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}
