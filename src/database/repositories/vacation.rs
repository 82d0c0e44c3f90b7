use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{NewVacationLeave, VacationLeave};

#[derive(Clone)]
pub struct VacationRepository {
    pool: SqlitePool,
}

impl VacationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a new vacation request. Status always starts out PENDING.
    pub async fn insert(&self, input: NewVacationLeave) -> Result<VacationLeave> {
        let row = sqlx::query_as::<_, VacationLeave>(
            r#"
            INSERT INTO
                vacation_leaves (employee_name, start_date, end_date, status)
            VALUES
                (?, ?, ?, 'PENDING')
            RETURNING
                id,
                employee_name,
                start_date,
                end_date,
                status,
                created_at
            "#,
        )
        .bind(input.employee_name)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// All vacation requests for this category, newest start date first.
    pub async fn list(&self) -> Result<Vec<VacationLeave>> {
        let rows = sqlx::query_as::<_, VacationLeave>(
            r#"
            SELECT
                id,
                employee_name,
                start_date,
                end_date,
                status,
                created_at
            FROM
                vacation_leaves
            ORDER BY
                start_date DESC,
                id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Delete a single vacation request. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM vacation_leaves WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
