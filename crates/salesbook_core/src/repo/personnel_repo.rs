//! Personnel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `salesmen` and `social_performance` tables.
//! - Map rows to entities and reject malformed persisted state on read.
//!
//! # Invariants
//! - A record's identity for update/delete is `(salesman_id, date)`; the
//!   schema enforces uniqueness of that pair.
//! - An update or delete that matches nothing is a no-op, not an error.
//! - `delete_salesman` never leaves orphaned evaluation records behind.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::performance::SocialPerformanceRecord;
use crate::model::salesman::{SalesMan, SalesmanId};
use chrono::NaiveDate;
use log::{debug, info};
use rusqlite::{params, Connection, ErrorCode, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SALESMEN_TABLE: &str = "salesmen";
const PERFORMANCE_TABLE: &str = "social_performance";
const SALESMEN_COLUMNS: &[&str] = &["sid", "firstname", "lastname"];
const PERFORMANCE_COLUMNS: &[&str] = &["salesman_id", "description", "date", "score"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surface of personnel persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored row failed entity mapping, e.g. malformed date text.
    InvalidData(String),
    /// Insert would create a second record for the same salesman and date.
    DuplicateRecord {
        salesman_id: SalesmanId,
        date: NaiveDate,
    },
    /// The connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted personnel data: {message}")
            }
            Self::DuplicateRecord { salesman_id, date } => write!(
                f,
                "performance record for salesman {salesman_id} on {date} already exists"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match supported version {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{column}` is missing from table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for salesmen and their social performance records.
pub trait PersonnelRepository {
    /// Persists a new salesman. `id` uniqueness is not checked; a duplicate
    /// insert succeeds silently.
    fn create_salesman(&self, salesman: &SalesMan) -> RepoResult<()>;
    /// Gets the first salesman matching `sid`.
    fn get_salesman(&self, sid: SalesmanId) -> RepoResult<Option<SalesMan>>;
    /// Lists all salesmen in storage order.
    fn list_salesmen(&self) -> RepoResult<Vec<SalesMan>>;
    /// Overwrites first/last name where `sid` matches; `id` itself is never
    /// written. Returns whether any row changed.
    fn update_salesman(&self, salesman: &SalesMan) -> RepoResult<bool>;
    /// Removes the salesman and all owned evaluation records in one
    /// transaction. Returns whether a salesman row existed.
    fn delete_salesman(&self, sid: SalesmanId) -> RepoResult<bool>;
    /// Persists an evaluation attributed to `salesman_id`. The salesman is
    /// not required to exist.
    fn add_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<()>;
    /// Lists all evaluations attributed to `salesman_id`. Fails as a whole
    /// when any stored date cannot be parsed.
    fn list_performance_records(
        &self,
        salesman_id: SalesmanId,
    ) -> RepoResult<Vec<SocialPerformanceRecord>>;
    /// Overwrites description/score of the record matching
    /// `(salesman_id, record.date)`. Returns whether a row changed.
    fn update_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<bool>;
    /// Removes the record matching `(salesman_id, record.date)`. Returns
    /// whether a row existed.
    fn delete_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<bool>;
}

/// SQLite-backed personnel store.
pub struct SqlitePersonnelStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonnelStore<'conn> {
    /// Constructs a store from a migrated, ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match
    ///   the latest migration.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when expected
    ///   schema objects are absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl PersonnelRepository for SqlitePersonnelStore<'_> {
    fn create_salesman(&self, salesman: &SalesMan) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO salesmen (sid, firstname, lastname) VALUES (?1, ?2, ?3);",
            params![
                salesman.id,
                salesman.first_name.as_str(),
                salesman.last_name.as_str(),
            ],
        )?;

        debug!(
            "event=salesman_create module=repo status=ok sid={}",
            salesman.id
        );
        Ok(())
    }

    fn get_salesman(&self, sid: SalesmanId) -> RepoResult<Option<SalesMan>> {
        let mut stmt = self
            .conn
            .prepare("SELECT sid, firstname, lastname FROM salesmen WHERE sid = ?1;")?;

        let mut rows = stmt.query([sid])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_salesman_row(row)?));
        }

        Ok(None)
    }

    fn list_salesmen(&self) -> RepoResult<Vec<SalesMan>> {
        let mut stmt = self
            .conn
            .prepare("SELECT sid, firstname, lastname FROM salesmen;")?;

        let mut rows = stmt.query([])?;
        let mut salesmen = Vec::new();
        while let Some(row) = rows.next()? {
            salesmen.push(parse_salesman_row(row)?);
        }

        Ok(salesmen)
    }

    fn update_salesman(&self, salesman: &SalesMan) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE salesmen SET firstname = ?2, lastname = ?3 WHERE sid = ?1;",
            params![
                salesman.id,
                salesman.first_name.as_str(),
                salesman.last_name.as_str(),
            ],
        )?;

        if changed == 0 {
            debug!(
                "event=salesman_update module=repo status=noop sid={}",
                salesman.id
            );
        }
        Ok(changed > 0)
    }

    fn delete_salesman(&self, sid: SalesmanId) -> RepoResult<bool> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let salesmen_removed = tx.execute("DELETE FROM salesmen WHERE sid = ?1;", [sid])?;
        let records_removed = tx.execute(
            "DELETE FROM social_performance WHERE salesman_id = ?1;",
            [sid],
        )?;

        tx.commit()?;

        info!(
            "event=salesman_delete module=repo status=ok sid={sid} \
             salesmen_removed={salesmen_removed} records_removed={records_removed}"
        );
        Ok(salesmen_removed > 0)
    }

    fn add_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<()> {
        let result = self.conn.execute(
            "INSERT INTO social_performance (salesman_id, description, date, score)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                salesman_id,
                record.description.as_str(),
                date_to_db(record.date),
                record.score,
            ],
        );

        match result {
            Ok(_) => {
                debug!(
                    "event=record_add module=repo status=ok salesman_id={salesman_id} date={}",
                    record.date
                );
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => Err(RepoError::DuplicateRecord {
                salesman_id,
                date: record.date,
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn list_performance_records(
        &self,
        salesman_id: SalesmanId,
    ) -> RepoResult<Vec<SocialPerformanceRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT description, date, score FROM social_performance WHERE salesman_id = ?1;",
        )?;

        let mut rows = stmt.query([salesman_id])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_performance_row(row)?);
        }

        Ok(records)
    }

    fn update_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE social_performance
             SET description = ?3, score = ?4
             WHERE salesman_id = ?1 AND date = ?2;",
            params![
                salesman_id,
                date_to_db(record.date),
                record.description.as_str(),
                record.score,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_performance_record(
        &self,
        record: &SocialPerformanceRecord,
        salesman_id: SalesmanId,
    ) -> RepoResult<bool> {
        let removed = self.conn.execute(
            "DELETE FROM social_performance WHERE salesman_id = ?1 AND date = ?2;",
            params![salesman_id, date_to_db(record.date)],
        )?;

        Ok(removed > 0)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    ensure_table_ready(conn, SALESMEN_TABLE, SALESMEN_COLUMNS)?;
    ensure_table_ready(conn, PERFORMANCE_TABLE, PERFORMANCE_COLUMNS)?;
    Ok(())
}

fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    required_columns: &[&'static str],
) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>("name")?);
    }

    for column in required_columns {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table,
                column: *column,
            });
        }
    }

    Ok(())
}

fn parse_salesman_row(row: &Row<'_>) -> RepoResult<SalesMan> {
    Ok(SalesMan {
        id: row.get("sid")?,
        first_name: row.get("firstname")?,
        last_name: row.get("lastname")?,
    })
}

fn parse_performance_row(row: &Row<'_>) -> RepoResult<SocialPerformanceRecord> {
    let date_text: String = row.get("date")?;
    let date = parse_db_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in social_performance.date"
        ))
    })?;

    Ok(SocialPerformanceRecord {
        description: row.get("description")?,
        date,
        score: row.get("score")?,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_db_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
    )
}
