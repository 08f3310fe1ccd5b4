//! SQLite implementation of the hospital repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Hospital, NewHospital};
use crate::domain::repositories::HospitalRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct HospitalRow {
    id: i64,
    name: String,
    address: String,
    phone: String,
    capacity: i64,
    created_at: DateTime<Utc>,
}

impl From<HospitalRow> for Hospital {
    fn from(r: HospitalRow) -> Self {
        Hospital::new(r.id, r.name, r.address, r.phone, r.capacity, r.created_at)
    }
}

/// SQLite repository for hospital records.
///
/// Each operation is a single statement, so atomicity of create/update/delete
/// comes from SQLite itself.
pub struct SqliteHospitalRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteHospitalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HospitalRepository for SqliteHospitalRepository {
    async fn create(&self, new_hospital: NewHospital) -> Result<Hospital, AppError> {
        let row = sqlx::query_as::<_, HospitalRow>(
            r#"
            INSERT INTO hospitals (name, address, phone, capacity, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, address, phone, capacity, created_at
            "#,
        )
        .bind(new_hospital.name)
        .bind(new_hospital.address)
        .bind(new_hospital.phone)
        .bind(new_hospital.capacity)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Hospital>, AppError> {
        let rows = sqlx::query_as::<_, HospitalRow>(
            r#"
            SELECT id, name, address, phone, capacity, created_at
            FROM hospitals
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Hospital::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Hospital>, AppError> {
        let row = sqlx::query_as::<_, HospitalRow>(
            r#"
            SELECT id, name, address, phone, capacity, created_at
            FROM hospitals
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Hospital::from))
    }

    async fn update(&self, id: i64, fields: NewHospital) -> Result<Option<Hospital>, AppError> {
        let row = sqlx::query_as::<_, HospitalRow>(
            r#"
            UPDATE hospitals SET
                name     = ?,
                address  = ?,
                phone    = ?,
                capacity = ?
            WHERE id = ?
            RETURNING id, name, address, phone, capacity, created_at
            "#,
        )
        .bind(fields.name)
        .bind(fields.address)
        .bind(fields.phone)
        .bind(fields.capacity)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Hospital::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hospitals WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hospitals")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
