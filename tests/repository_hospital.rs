mod common;

use chrono::{Duration, Utc};
use hospital_registry::domain::entities::NewHospital;
use hospital_registry::domain::repositories::HospitalRepository;
use hospital_registry::infrastructure::persistence::SqliteHospitalRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn fields(name: &str) -> NewHospital {
    NewHospital {
        name: name.to_string(),
        address: "123 Test St".to_string(),
        phone: "+11234567890".to_string(),
        capacity: 50,
    }
}

#[sqlx::test]
async fn test_create_assigns_id_and_timestamp(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    let before = Utc::now() - Duration::seconds(1);
    let created = repo.create(fields("First")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "First");
    assert_eq!(created.phone, "+11234567890");
    assert!(created.created_at >= before);
}

#[sqlx::test]
async fn test_create_ids_are_unique(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    let a = repo.create(fields("A")).await.unwrap();
    let b = repo.create(fields("B")).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[sqlx::test]
async fn test_ids_are_not_reused_after_delete(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    let a = repo.create(fields("A")).await.unwrap();
    assert!(repo.delete(a.id).await.unwrap());
    let b = repo.create(fields("B")).await.unwrap();

    assert!(b.id > a.id);
}

#[sqlx::test]
async fn test_list_in_storage_order(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    for name in ["One", "Two", "Three"] {
        repo.create(fields(name)).await.unwrap();
    }

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.name)
        .collect();

    assert_eq!(names, vec!["One", "Two", "Three"]);
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    let created = repo.create(fields("Findable")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_replaces_fields_and_keeps_identity(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    let created = repo.create(fields("Before")).await.unwrap();

    let replacement = NewHospital {
        name: "After".to_string(),
        address: "9 New Rd".to_string(),
        phone: "987654321".to_string(),
        capacity: 7,
    };
    let updated = repo
        .update(created.id, replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.address, "9 New Rd");
    assert_eq!(updated.phone, "987654321");
    assert_eq!(updated.capacity, 7);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool.clone()));

    let result = repo.update(42, fields("Ghost")).await.unwrap();

    assert!(result.is_none());
    assert_eq!(common::count_hospitals(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool));

    let created = repo.create(fields("Doomed")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_count(pool: SqlitePool) {
    let repo = SqliteHospitalRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.count().await.unwrap(), 0);

    common::insert_hospital(&pool, "Seeded").await;
    repo.create(fields("Created")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_schema_rejects_zero_capacity(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO hospitals (name, address, phone, capacity, created_at)
         VALUES ('X', 'Y', '123456789', 0, '2026-01-01T00:00:00Z')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err());
}
