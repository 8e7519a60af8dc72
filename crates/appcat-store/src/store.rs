use std::path::Path;
use std::sync::Mutex;

use appcat::CatalogItem;
use rusqlite::OpenFlags;

use crate::schema;

/// SQLite-backed catalog of installable packages.
///
/// The synced artifact is opened read-only so a background refresh can
/// never race a writer through this handle; the writable constructors
/// exist for seeding and tests. One handle owns one connection.
pub struct CatalogStore {
    conn: Mutex<rusqlite::Connection>,
}

/// Errors specific to catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("catalog not found at {0}")]
    Missing(String),

    #[error("{path} is not a valid catalog database: {message}")]
    Invalid { path: String, message: String },

    #[error("database error: {0}")]
    Database(String),

    #[error("migration error: {0}")]
    Migration(String),
}

impl CatalogStore {
    /// Open the synced artifact for querying. Fails if the file is absent
    /// or is not a SQLite database.
    pub fn open_read_only(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::Missing(path.display().to_string()));
        }

        let conn = rusqlite::Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        // SQLite defers reading the file until the first statement runs;
        // force one here so corruption surfaces at open time.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| StoreError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open (or create) a writable catalog, creating the schema if absent.
    /// Used for the bundled seed database.
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        let conn =
            rusqlite::Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Self::from_writable(conn)
    }

    /// Open an in-memory catalog (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = rusqlite::Connection::open_in_memory()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Self::from_writable(conn)
    }

    fn from_writable(mut conn: rusqlite::Connection) -> Result<Self, StoreError> {
        schema::migrations()
            .to_latest(&mut conn)
            .map_err(|e| StoreError::Migration(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// All packages, ordered by name.
    pub fn items(&self) -> Result<Vec<CatalogItem>, StoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare("SELECT ID, Name, Category FROM Items ORDER BY Name")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let items = stmt
            .query_map([], Self::row_to_item)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(items)
    }

    /// Packages whose name or category matches the query, ordered by name.
    pub fn search(&self, query: &str) -> Result<Vec<CatalogItem>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let pattern = format!("%{query}%");

        let mut stmt = conn
            .prepare(
                "SELECT ID, Name, Category FROM Items
                 WHERE Name LIKE ?1 OR Category LIKE ?1
                 ORDER BY Name",
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let items = stmt
            .query_map([&pattern], Self::row_to_item)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(items)
    }

    /// Distinct non-null categories, sorted.
    pub fn categories(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT Category FROM Items
                 WHERE Category IS NOT NULL
                 ORDER BY Category",
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let categories = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(categories)
    }

    /// Number of packages in the catalog.
    pub fn item_count(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().unwrap();

        conn.query_row("SELECT count(*) FROM Items", [], |row| {
            row.get::<_, i64>(0).map(|n| n as u64)
        })
        .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Insert or replace a package row. Writable handles only; a read-only
    /// handle surfaces the SQLite error.
    pub fn insert_item(&self, item: &CatalogItem) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT OR REPLACE INTO Items (ID, Name, Category) VALUES (?1, ?2, ?3)",
            rusqlite::params![item.id, item.name, item.category],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<CatalogItem> {
        Ok(CatalogItem {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
        })
    }
}
