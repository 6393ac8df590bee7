//! Employee record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide exists/add/remove/scan APIs over the shared `employees` table.
//! - Project the employee sum type to and from the nullable-column row
//!   shape, keeping the model storage-agnostic.
//!
//! # Invariants
//! - `add` performs a uniqueness check before any write; a duplicate ID is
//!   a domain rejection, never an engine constraint violation.
//! - `remove` is idempotent; removing an absent ID succeeds.
//! - Decoded rows must populate exactly the field group selected by the
//!   `type` discriminator.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, EmployeeKind};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    type,
    monthly_salary,
    hours_worked,
    hourly_rate
FROM employees";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "type",
    "monthly_salary",
    "hours_worked",
    "hourly_rate",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Record-store error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Domain rejection: the ID is already taken. No write happened.
    DuplicateId(EmployeeId),
    /// Storage-engine failure (connectivity, statement, constraint).
    Db(DbError),
    /// Persisted row violates the variant nullability rule.
    InvalidData(String),
    /// Connection has no applied schema (fresh or foreign database).
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema is versioned but a required table is absent.
    MissingRequiredTable(&'static str),
    /// Schema is versioned but a required column is absent.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "employee id {id} already exists"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not initialized to {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
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

/// Read model produced by full scans.
///
/// Carries the reconstructed variant payload plus the salary derived at
/// read time with the model's formulas. There is no precomputed salary
/// column in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: EmployeeId,
    pub name: String,
    pub kind: EmployeeKind,
    pub salary: f64,
}

/// Record-store interface for employee persistence.
pub trait EmployeeRepository {
    /// Returns whether any stored record carries `id`. Pure read.
    fn exists(&self, id: EmployeeId) -> RepoResult<bool>;
    /// Inserts one employee after an explicit uniqueness check.
    fn add(&self, employee: &Employee) -> RepoResult<()>;
    /// Deletes the row matching `id`, returning how many rows matched.
    /// Succeeds as a no-op when nothing matched.
    fn remove(&self, id: EmployeeId) -> RepoResult<u64>;
    /// Reads every row, in engine order, decoding variant payloads.
    fn scan_all(&self) -> RepoResult<Vec<StoredRecord>>;
}

/// SQLite-backed employee record store.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a bootstrapped connection after verifying the schema it
    /// carries is usable by this repository.
    ///
    /// # Errors
    /// - `UninitializedConnection` when no migration has been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not match what the queries below require.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected = crate::db::migrations::latest_version();
        let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual == 0 {
            return Err(RepoError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        if !table_exists(conn, "employees")? {
            return Err(RepoError::MissingRequiredTable("employees"));
        }

        for column in REQUIRED_COLUMNS {
            if !column_exists(conn, "employees", column)? {
                return Err(RepoError::MissingRequiredColumn {
                    table: "employees",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn exists(&self, id: EmployeeId) -> RepoResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM employees WHERE id = ?1;",
            [id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn add(&self, employee: &Employee) -> RepoResult<()> {
        if self.exists(employee.id)? {
            return Err(RepoError::DuplicateId(employee.id));
        }

        // One group of nullable columns per variant; the other stays NULL.
        let (monthly_salary, hours_worked, hourly_rate): (Option<f64>, Option<i64>, Option<f64>) =
            match employee.kind {
                EmployeeKind::FullTime { monthly_salary } => (Some(monthly_salary), None, None),
                EmployeeKind::PartTime {
                    hours_worked,
                    hourly_rate,
                } => (None, Some(hours_worked), Some(hourly_rate)),
            };

        self.conn.execute(
            "INSERT INTO employees (
                id,
                name,
                type,
                monthly_salary,
                hours_worked,
                hourly_rate
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                employee.id,
                employee.name.as_str(),
                employee.kind.type_tag(),
                monthly_salary,
                hours_worked,
                hourly_rate,
            ],
        )?;

        Ok(())
    }

    fn remove(&self, id: EmployeeId) -> RepoResult<u64> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        Ok(changed as u64)
    }

    fn scan_all(&self) -> RepoResult<Vec<StoredRecord>> {
        let mut stmt = self.conn.prepare(&format!("{EMPLOYEE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_employee_row(row)?);
        }

        Ok(records)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<StoredRecord> {
    let id: EmployeeId = row.get("id")?;
    let name: String = row.get("name")?;
    let type_text: String = row.get("type")?;
    let monthly_salary: Option<f64> = row.get("monthly_salary")?;
    let hours_worked: Option<i64> = row.get("hours_worked")?;
    let hourly_rate: Option<f64> = row.get("hourly_rate")?;

    let kind = match type_text.as_str() {
        "fulltime" => match (monthly_salary, hours_worked, hourly_rate) {
            (Some(monthly_salary), None, None) => EmployeeKind::FullTime { monthly_salary },
            _ => {
                return Err(RepoError::InvalidData(format!(
                    "fulltime row {id} must populate monthly_salary and nothing else"
                )));
            }
        },
        "parttime" => match (monthly_salary, hours_worked, hourly_rate) {
            (None, Some(hours_worked), Some(hourly_rate)) => EmployeeKind::PartTime {
                hours_worked,
                hourly_rate,
            },
            _ => {
                return Err(RepoError::InvalidData(format!(
                    "parttime row {id} must populate hours_worked and hourly_rate and nothing else"
                )));
            }
        },
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid employee type `{other}` in employees.type"
            )));
        }
    };

    Ok(StoredRecord {
        id,
        name,
        salary: kind.salary(),
        kind,
    })
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(found == 1)
}

fn column_exists(conn: &Connection, table_name: &str, column_name: &str) -> RepoResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        [table_name, column_name],
        |row| row.get(0),
    )?;
    Ok(found == 1)
}
