//! Roster table rendering.
//!
//! # Responsibility
//! - Format scan output into the fixed-width operator listing.
//! - Show `N/A` for the field group the record's variant leaves empty.

use salarysync_core::{EmployeeKind, StoredRecord};

const EMPTY_ROSTER_MESSAGE: &str = "NO EMPLOYEES PRESENT!!!";

/// Renders the full roster listing, one row per stored record.
///
/// Rows appear in scan order; the store gives no ordering guarantee.
pub fn render_table(records: &[StoredRecord]) -> String {
    if records.is_empty() {
        return EMPTY_ROSTER_MESSAGE.to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<20} {:<15} {:<15} {:<12} {:<12} {:<15}\n",
        "ID", "Name", "Type", "Monthly Salary", "Hours Worked", "Hourly Rate", "Final Salary"
    ));
    out.push_str(&"-".repeat(108));
    out.push('\n');

    for record in records {
        out.push_str(&render_row(record));
        out.push('\n');
    }

    out
}

fn render_row(record: &StoredRecord) -> String {
    match record.kind {
        EmployeeKind::FullTime { monthly_salary } => format!(
            "{:<10} {:<20} {:<15} {:<15} {:<12} {:<12} {:<15}",
            record.id,
            record.name,
            "Full-Time",
            format!("{monthly_salary:.2}"),
            "N/A",
            "N/A",
            format!("{:.2}", record.salary)
        ),
        EmployeeKind::PartTime {
            hours_worked,
            hourly_rate,
        } => format!(
            "{:<10} {:<20} {:<15} {:<15} {:<12} {:<12} {:<15}",
            record.id,
            record.name,
            "Part-Time",
            "N/A",
            hours_worked,
            format!("{hourly_rate:.2}"),
            format!("{:.2}", record.salary)
        ),
    }
}
