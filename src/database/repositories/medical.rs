use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{MedicalLeave, NewMedicalLeave};

#[derive(Clone)]
pub struct MedicalRepository {
    pool: SqlitePool,
}

impl MedicalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a new medical request. The document URI is kept verbatim; the
    /// attachment itself lives with whatever picked it.
    pub async fn insert(&self, input: NewMedicalLeave) -> Result<MedicalLeave> {
        let row = sqlx::query_as::<_, MedicalLeave>(
            r#"
            INSERT INTO
                medical_leaves (employee_name, start_date, end_date, document_uri, doctor_name)
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id,
                employee_name,
                start_date,
                end_date,
                document_uri,
                doctor_name,
                created_at
            "#,
        )
        .bind(input.employee_name)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.document_uri)
        .bind(input.doctor_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// All medical requests for this category, newest start date first.
    pub async fn list(&self) -> Result<Vec<MedicalLeave>> {
        let rows = sqlx::query_as::<_, MedicalLeave>(
            r#"
            SELECT
                id,
                employee_name,
                start_date,
                end_date,
                document_uri,
                doctor_name,
                created_at
            FROM
                medical_leaves
            ORDER BY
                start_date DESC,
                id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Delete a single medical request. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM medical_leaves WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
