use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{LicenseLeave, NewLicenseLeave};

#[derive(Clone)]
pub struct LicenseRepository {
    pool: SqlitePool,
}

impl LicenseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a new license request. Relationship and gender are only present
    /// for the bereavement and birth subtypes; the form controller enforces
    /// that before assembly.
    pub async fn insert(&self, input: NewLicenseLeave) -> Result<LicenseLeave> {
        let row = sqlx::query_as::<_, LicenseLeave>(
            r#"
            INSERT INTO
                license_leaves (
                    employee_name,
                    start_date,
                    end_date,
                    document_uri,
                    subtype,
                    relationship,
                    gender
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                employee_name,
                start_date,
                end_date,
                document_uri,
                subtype,
                relationship,
                gender,
                created_at
            "#,
        )
        .bind(input.employee_name)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.document_uri)
        .bind(input.subtype)
        .bind(input.relationship)
        .bind(input.gender)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// All license requests for this category, newest start date first.
    pub async fn list(&self) -> Result<Vec<LicenseLeave>> {
        let rows = sqlx::query_as::<_, LicenseLeave>(
            r#"
            SELECT
                id,
                employee_name,
                start_date,
                end_date,
                document_uri,
                subtype,
                relationship,
                gender,
                created_at
            FROM
                license_leaves
            ORDER BY
                start_date DESC,
                id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Delete a single license request. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM license_leaves WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
