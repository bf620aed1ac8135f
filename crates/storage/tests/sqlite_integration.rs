use chrono::Duration;
use course_core::curriculum::PROGRESS_KEY;
use course_core::model::{BadgeId, LessonNumber, ProgressRecord, WeekNumber};
use course_core::time::fixed_now;
use storage::repository::{KeyValueStore, ProgressRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_progress() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_progress().await.expect("load empty").is_none());

    let mut record = ProgressRecord::new();
    for lesson in 1..=5 {
        record
            .complete_lesson(
                WeekNumber::new(1),
                LessonNumber::new(lesson),
                fixed_now() + Duration::minutes(i64::from(lesson)),
            )
            .unwrap();
    }
    record.award_badge(BadgeId::week_complete(WeekNumber::new(1)));
    record.touch(fixed_now());
    repo.save_progress(&record).await.expect("save");

    let fetched = repo.load_progress().await.expect("load").expect("present");
    assert_eq!(fetched, record);
    assert_eq!(fetched.completed_lessons(), 5);
}

#[tokio::test]
async fn sqlite_overwrites_single_entry() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut record = ProgressRecord::new();
    repo.save_progress(&record).await.unwrap();
    record
        .complete_lesson(WeekNumber::new(4), LessonNumber::new(2), fixed_now())
        .unwrap();
    repo.save_progress(&record).await.unwrap();

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_entries")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let fetched = repo.load_progress().await.unwrap().unwrap();
    assert!(fetched.is_lesson_completed(WeekNumber::new(4), LessonNumber::new(2)));
}

#[tokio::test]
async fn sqlite_reports_corrupt_value() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put(PROGRESS_KEY, "[]").await.unwrap();
    assert!(matches!(
        repo.load_progress().await,
        Err(StorageError::Serialization(_))
    ));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn storage_sqlite_wires_progress_repository() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .progress
        .save_progress(&ProgressRecord::new())
        .await
        .unwrap();
    let fetched = storage.progress.load_progress().await.unwrap().unwrap();
    assert_eq!(fetched.total_lessons(), 25);
}
