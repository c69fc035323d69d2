// dqdash-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::domain::TableRef;
use crate::domain::check::{CheckRecord, Dataset, normalize_outcome};
use crate::error::DashboardError;
use crate::infrastructure::config::source::{SourceConfig, SourceType};
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::source::{CacheKey, CheckSource};

/// Catalog alias a Postgres database is attached under.
const POSTGRES_CATALOG: &str = "pg";

const CHECK_COLUMNS: [&str; 6] = [
    "data_source",
    "table_name",
    "check_name",
    "column_name",
    "outcome",
    "timestamp",
];

pub struct DuckDBSource {
    conn: Arc<Mutex<Connection>>,
    table: TableRef,
    key: CacheKey,
}

impl DuckDBSource {
    /// Reads `table` from a DuckDB file (or `:memory:`).
    pub fn new(db_path: &str, table: &str) -> Result<Self, DashboardError> {
        let conn = open(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            table: TableRef::parse(table)?,
            key: CacheKey {
                connection: format!("duckdb:{}", db_path),
                table: table.to_string(),
            },
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, DashboardError> {
        match config.source_type {
            SourceType::DuckDB => Self::new(&config.path, &config.table),
            SourceType::Postgres => {
                let conn = open(&config.path)?;
                attach_postgres(&conn, &config.postgres_dsn())?;
                info!(remote = %config.fingerprint(), "Postgres attached through DuckDB");
                Ok(Self {
                    conn: Arc::new(Mutex::new(conn)),
                    table: TableRef::parse(&config.table)?.in_catalog(POSTGRES_CATALOG),
                    key: CacheKey {
                        connection: config.fingerprint(),
                        table: config.table.clone(),
                    },
                })
            }
        }
    }

    /// Runs a statement on the underlying connection (fixtures, seeding).
    pub fn execute(&self, sql: &str) -> Result<(), DashboardError> {
        self.lock()?.execute_batch(sql)?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DashboardError> {
        self.conn.lock().map_err(|_| {
            DashboardError::Infrastructure(InfrastructureError::Database(DatabaseError::Poisoned))
        })
    }

    fn select_sql(&self) -> String {
        let columns = CHECK_COLUMNS
            .iter()
            .map(|c| format!("CAST(\"{c}\" AS VARCHAR)"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SELECT {} FROM {}", columns, self.table.quoted())
    }
}

fn open(db_path: &str) -> Result<Connection, InfrastructureError> {
    let config = Config::default();
    let conn = if db_path == ":memory:" {
        Connection::open_in_memory_with_flags(config)?
    } else {
        Connection::open_with_flags(db_path, config)?
    };
    Ok(conn)
}

fn attach_postgres(conn: &Connection, dsn: &str) -> Result<(), InfrastructureError> {
    let sql = format!(
        "INSTALL postgres; LOAD postgres; ATTACH '{}' AS {} (TYPE postgres, READ_ONLY);",
        dsn.replace('\'', "''"),
        POSTGRES_CATALOG
    );
    conn.execute_batch(&sql)?;
    Ok(())
}

#[async_trait]
impl CheckSource for DuckDBSource {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Dataset, DashboardError> {
        let start = Instant::now();
        let sql = self.select_sql();
        debug!("⚡ Fetching check log: {}", sql);

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(CheckRecord {
                data_source: row.get(0)?,
                table_name: row.get(1)?,
                check_name: row.get(2)?,
                column_name: row.get(3)?,
                outcome: row
                    .get::<_, Option<String>>(4)?
                    .map(|o| normalize_outcome(&o)),
                timestamp: row.get(5)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        info!(
            rows = records.len(),
            table = %self.table,
            "✅ Check log fetched in {:.2?}",
            start.elapsed()
        );
        Ok(Dataset::new(records))
    }

    fn cache_key(&self) -> CacheKey {
        self.key.clone()
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}
