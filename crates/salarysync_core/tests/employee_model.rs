use salarysync_core::{Employee, EmployeeKind};

#[test]
fn full_time_salary_is_the_monthly_figure_unchanged() {
    let employee = Employee::full_time(1, "Alice", 5000.0);

    assert_eq!(employee.id, 1);
    assert_eq!(employee.name, "Alice");
    assert_eq!(employee.salary(), 5000.0);
}

#[test]
fn part_time_salary_is_hours_times_rate() {
    let employee = Employee::part_time(2, "Bob", 160, 25.0);

    assert_eq!(employee.salary(), 4000.0);
    assert_eq!(
        employee.kind,
        EmployeeKind::PartTime {
            hours_worked: 160,
            hourly_rate: 25.0
        }
    );
}

#[test]
fn zero_hours_yields_zero_salary() {
    let employee = Employee::part_time(3, "Cara", 0, 99.5);
    assert_eq!(employee.salary(), 0.0);
}

#[test]
fn model_does_not_clamp_or_reject_negative_inputs() {
    // Non-negativity is the caller's responsibility; the model computes
    // with values as given.
    let full_time = Employee::full_time(4, "Dan", -100.0);
    assert_eq!(full_time.salary(), -100.0);

    let part_time = Employee::part_time(5, "Eve", -5, 10.0);
    assert_eq!(part_time.salary(), -50.0);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let employee = Employee::full_time(1, "Alice", 5000.0);
    let json = serde_json::to_value(&employee).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["type"], "fulltime");
    assert_eq!(json["monthly_salary"], 5000.0);
    assert!(json.get("hours_worked").is_none());
    assert!(json.get("hourly_rate").is_none());

    let employee = Employee::part_time(2, "Bob", 160, 25.0);
    let json = serde_json::to_value(&employee).unwrap();

    assert_eq!(json["type"], "parttime");
    assert_eq!(json["hours_worked"], 160);
    assert_eq!(json["hourly_rate"], 25.0);
    assert!(json.get("monthly_salary").is_none());
}

#[test]
fn deserialization_restores_the_variant_from_the_type_tag() {
    let employee: Employee = serde_json::from_str(
        r#"{"id":7,"name":"Frank","type":"parttime","hours_worked":80,"hourly_rate":12.5}"#,
    )
    .unwrap();

    assert_eq!(employee, Employee::part_time(7, "Frank", 80, 12.5));
}
