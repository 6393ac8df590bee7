//! Interactive payroll menu.
//!
//! # Responsibility
//! - Drive the add/remove/display loop over a single owned connection.
//! - Report domain rejections and storage failures to the operator and
//!   keep the session running.

mod render;

use log::{error, info};
use salarysync_core::db::open_db;
use salarysync_core::{
    core_version, default_log_level, init_logging, EmployeeRepository, PayrollService, RepoError,
    SqliteEmployeeRepository,
};
use std::error::Error;
use std::io::{self, BufRead, Write};

const DEFAULT_DB_PATH: &str = "salarysync.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    Display,
    Exit,
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::Remove),
        "3" => Some(MenuChoice::Display),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("SALARYSYNC_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let db_path = std::env::var("SALARYSYNC_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    // Startup failure to open the connection is the only fatal error.
    let conn = open_db(&db_path)?;
    let repo = SqliteEmployeeRepository::try_new(&conn)?;
    let service = PayrollService::new(repo);

    info!(
        "event=session_start module=cli status=ok version={} db_path={}",
        core_version(),
        db_path
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        match parse_choice(&line) {
            Some(MenuChoice::Add) => add_employee(&service, &mut input)?,
            Some(MenuChoice::Remove) => remove_employee(&service, &mut input)?,
            Some(MenuChoice::Display) => display_employees(&service),
            Some(MenuChoice::Exit) => {
                println!("Exiting...");
                break;
            }
            None => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("================ MENU ================");
    println!("1. Add Employee");
    println!("2. Remove Employee");
    println!("3. Display Employees");
    println!("4. Exit");
    println!("--------------------------------------");
    print!("Choose an option: ");
    let _ = io::stdout().flush();
}

fn add_employee<R: EmployeeRepository>(
    service: &PayrollService<R>,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn Error>> {
    let Some(type_text) = prompt(input, "Enter employee type (fulltime/parttime): ")? else {
        return Ok(());
    };
    let type_text = type_text.trim().to_ascii_lowercase();
    if type_text != "fulltime" && type_text != "parttime" {
        println!("Invalid employee type.");
        return Ok(());
    }

    let Some(name) = prompt(input, "Enter employee name: ")? else {
        return Ok(());
    };
    let name = name.trim().to_string();

    let Some(id_text) = prompt(input, "Enter employee ID: ")? else {
        return Ok(());
    };
    let Ok(id) = id_text.trim().parse::<i64>() else {
        println!("Invalid employee ID.");
        return Ok(());
    };

    let outcome = if type_text == "fulltime" {
        let Some(salary) = prompt_f64(input, "Enter monthly salary: ")? else {
            return Ok(());
        };
        service.hire_full_time(id, name, salary)
    } else {
        let Some(hours_text) = prompt(input, "Enter hours worked: ")? else {
            return Ok(());
        };
        let Ok(hours) = hours_text.trim().parse::<i64>() else {
            println!("Invalid hours worked.");
            return Ok(());
        };
        let Some(rate) = prompt_f64(input, "Enter hourly rate: ")? else {
            return Ok(());
        };
        service.hire_part_time(id, name, hours, rate)
    };

    match outcome {
        Ok(()) => println!("Employee Added Successfully !!!"),
        Err(RepoError::DuplicateId(id)) => {
            println!("Error: Employee ID {id} already exists. Please enter a unique ID.");
        }
        Err(err) => report_storage_failure("add", &err),
    }

    Ok(())
}

fn remove_employee<R: EmployeeRepository>(
    service: &PayrollService<R>,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn Error>> {
    let Some(id_text) = prompt(input, "Enter employee ID to remove: ")? else {
        return Ok(());
    };
    let Ok(id) = id_text.trim().parse::<i64>() else {
        println!("Invalid employee ID.");
        return Ok(());
    };

    // Removal is idempotent; an absent ID still counts as success.
    match service.remove_employee(id) {
        Ok(_) => println!("Employee Removed Successfully !!!"),
        Err(err) => report_storage_failure("remove", &err),
    }

    Ok(())
}

fn display_employees<R: EmployeeRepository>(service: &PayrollService<R>) {
    println!("Employee Details:");
    match service.list_employees() {
        Ok(records) => println!("{}", render::render_table(&records)),
        Err(err) => report_storage_failure("display", &err),
    }
}

fn report_storage_failure(operation: &str, err: &RepoError) {
    println!("Error: {operation} failed: {err}");
    error!("event=store_op module=cli status=error op={operation} error={err}");
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{message}");
    let _ = io::stdout().flush();
    read_line(input)
}

fn prompt_f64(input: &mut impl BufRead, message: &str) -> Result<Option<f64>, Box<dyn Error>> {
    let Some(text) = prompt(input, message)? else {
        return Ok(None);
    };
    match text.trim().parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid amount.");
            Ok(None)
        }
    }
}

/// Reads one line from the operator. Returns `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>, Box<dyn Error>> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::{parse_choice, read_line, MenuChoice};

    #[test]
    fn parse_choice_maps_menu_digits() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Add));
        assert_eq!(parse_choice(" 2 \n"), Some(MenuChoice::Remove));
        assert_eq!(parse_choice("3"), Some(MenuChoice::Display));
        assert_eq!(parse_choice("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_choice_rejects_unknown_input() {
        assert_eq!(parse_choice("5"), None);
        assert_eq!(parse_choice("add"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn read_line_returns_none_at_end_of_input() {
        let mut input = "only line\n".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("only line\n"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
