//! Employee domain model.
//!
//! # Responsibility
//! - Define the two payroll variants and their salary computation rule.
//! - Stay independent of how records are persisted.
//!
//! # Invariants
//! - `id` is immutable after creation and never reused for another employee.
//! - Exactly one variant payload exists per employee; the payload decides
//!   which pay fields are meaningful.

use serde::{Deserialize, Serialize};

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// Pay-model variant with its variant-specific fields.
///
/// Serialized with a `type` tag so the wire shape matches the persisted
/// discriminator column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmployeeKind {
    /// Salaried employee paid a fixed monthly figure.
    #[serde(rename = "fulltime")]
    FullTime { monthly_salary: f64 },
    /// Hourly employee paid per hour worked.
    #[serde(rename = "parttime")]
    PartTime { hours_worked: i64, hourly_rate: f64 },
}

impl EmployeeKind {
    /// Computes the pay owed under this variant's rule.
    ///
    /// Pure function of the payload: full-time returns the monthly figure
    /// unchanged, part-time returns hours times rate. Values are taken as
    /// given; callers validate non-negativity before construction.
    pub fn salary(&self) -> f64 {
        match *self {
            Self::FullTime { monthly_salary } => monthly_salary,
            Self::PartTime {
                hours_worked,
                hourly_rate,
            } => hours_worked as f64 * hourly_rate,
        }
    }

    /// Returns the discriminator tag used by storage and wire formats.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::FullTime { .. } => "fulltime",
            Self::PartTime { .. } => "parttime",
        }
    }
}

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable operator-chosen ID, unique across the roster.
    pub id: EmployeeId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Pay-model variant and its fields, flattened into the record.
    #[serde(flatten)]
    pub kind: EmployeeKind,
}

impl Employee {
    /// Creates a full-time employee with a fixed monthly salary.
    pub fn full_time(id: EmployeeId, name: impl Into<String>, monthly_salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            kind: EmployeeKind::FullTime { monthly_salary },
        }
    }

    /// Creates a part-time employee paid by the hour.
    pub fn part_time(
        id: EmployeeId,
        name: impl Into<String>,
        hours_worked: i64,
        hourly_rate: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: EmployeeKind::PartTime {
                hours_worked,
                hourly_rate,
            },
        }
    }

    /// Computes this employee's pay under their variant's rule.
    pub fn salary(&self) -> f64 {
        self.kind.salary()
    }
}
