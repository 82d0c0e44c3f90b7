use anyhow::Result;
use sqlx::SqlitePool;
use tempfile::TempDir;

use leavedesk::database::init_database;

// Test database wrapper: a real file-backed SQLite database in a temp
// directory, migrated on creation and dropped with the directory.
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}
