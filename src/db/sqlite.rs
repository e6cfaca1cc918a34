use crate::db::models::{Cafe, NewCafe};
use crate::db::schema::SQLITE_INIT;
use crate::error::CatalogError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct CafeStorage {
    pool: SqlitePool,
}

impl CafeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database file (creating it if missing) and run the bundled DDL.
    pub async fn connect(database_url: &str) -> Result<Self, CatalogError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CatalogError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new cafe. Fails on a duplicate `name` (UNIQUE constraint).
    /// Returns the row id.
    pub async fn insert(&self, cafe: &NewCafe) -> Result<i64, CatalogError> {
        let has_alcohol_i = if cafe.has_alcohol { 1 } else { 0 };
        let has_lunch_i = if cafe.has_lunch { 1 } else { 0 };
        let res = sqlx::query(
            r#"
            INSERT INTO cafes (
                name, map_url, address, website,
                has_alcohol, has_lunch, google_rate, price_range
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.address)
        .bind(&cafe.website)
        .bind(has_alcohol_i)
        .bind(has_lunch_i)
        .bind(&cafe.google_rate)
        .bind(&cafe.price_range)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    /// All cafes ordered by name; with a fragment, only those whose name
    /// contains it as a substring (database-default LIKE semantics).
    pub async fn list_sorted(&self, fragment: Option<&str>) -> Result<Vec<Cafe>, CatalogError> {
        let rows = match fragment {
            Some(fragment) => {
                sqlx::query(
                    r#"SELECT id, name, map_url, address, website,
                       has_alcohol, has_lunch, google_rate, price_range
                       FROM cafes WHERE name LIKE ? ORDER BY name"#,
                )
                .bind(format!("%{fragment}%"))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"SELECT id, name, map_url, address, website,
                       has_alcohol, has_lunch, google_rate, price_range
                       FROM cafes ORDER BY name"#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        rows.into_iter().map(Self::row_to_model).collect()
    }

    /// All cafes in insertion order (the deletion listing).
    pub async fn list_all(&self) -> Result<Vec<Cafe>, CatalogError> {
        let rows = sqlx::query(
            r#"SELECT id, name, map_url, address, website,
               has_alcohol, has_lunch, google_rate, price_range
               FROM cafes"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Cafe>, CatalogError> {
        let row = sqlx::query(
            r#"SELECT id, name, map_url, address, website,
               has_alcohol, has_lunch, google_rate, price_range
               FROM cafes WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Overwrite every field of the record (except id itself).
    pub async fn update_by_id(&self, id: i64, cafe: &NewCafe) -> Result<(), CatalogError> {
        let has_alcohol_i = if cafe.has_alcohol { 1 } else { 0 };
        let has_lunch_i = if cafe.has_lunch { 1 } else { 0 };
        sqlx::query(
            r#"UPDATE cafes SET
                name = ?,
                map_url = ?,
                address = ?,
                website = ?,
                has_alcohol = ?,
                has_lunch = ?,
                google_rate = ?,
                price_range = ?
              WHERE id = ?"#,
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.address)
        .bind(&cafe.website)
        .bind(has_alcohol_i)
        .bind(has_lunch_i)
        .bind(&cafe.google_rate)
        .bind(&cafe.price_range)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete by id. Returns the number of rows removed; 0 is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, CatalogError> {
        let res = sqlx::query("DELETE FROM cafes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    fn row_to_model(row: SqliteRow) -> Result<Cafe, CatalogError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let map_url: String = row.try_get("map_url")?;
        let address: String = row.try_get("address")?;
        let website: String = row.try_get("website")?;
        let has_alcohol_i: i64 = row.try_get("has_alcohol")?;
        let has_lunch_i: i64 = row.try_get("has_lunch")?;
        let google_rate: Option<String> = row.try_get("google_rate")?;
        let price_range: Option<String> = row.try_get("price_range")?;

        Ok(Cafe {
            id,
            name,
            map_url,
            address,
            website,
            has_alcohol: has_alcohol_i != 0,
            has_lunch: has_lunch_i != 0,
            google_rate,
            price_range,
        })
    }
}
