// Unit tests focus on the pure name rule engine and the in-memory service;
// no running server is needed.

use employee_backend::models::Employee;
use employee_backend::validation::employee::{NameRuleError, format_name, validate_employee_name};

fn employee(id: i32, name: &str) -> Employee {
    Employee::new(id, name)
}

#[test]
fn format_name_canonical_scenarios() {
    assert_eq!(format_name("john doe"), "John DOE");
    assert_eq!(format_name("juan carlos chamizo"), "Juan Carlos CHAMIZO");
    assert_eq!(format_name("jOHN dOE"), "John DOE");
}

#[test]
fn format_name_is_idempotent() {
    let canonical = format_name("juan carlos chamizo");
    assert_eq!(format_name(&canonical), canonical);
}

#[test]
fn digits_rejected_regardless_of_length() {
    for raw in ["John123 Doe", "1", &"a1".repeat(80)] {
        let mut c = employee(0, raw);
        assert_eq!(
            validate_employee_name(&mut c, &[]),
            Err(NameRuleError::ContainsDigits),
            "expected ContainsDigits for {raw:?}"
        );
    }
}

#[test]
fn short_and_long_names_rejected() {
    let mut c = employee(0, "A");
    assert_eq!(validate_employee_name(&mut c, &[]), Err(NameRuleError::TooShort));

    let mut c = employee(0, &"b".repeat(101));
    assert_eq!(validate_employee_name(&mut c, &[]), Err(NameRuleError::TooLong));
}

#[test]
fn duplicate_detected_across_case() {
    let roster = vec![employee(1, "john doe")];
    let mut c = employee(0, "JOHN DOE");
    assert_eq!(
        validate_employee_name(&mut c, &roster),
        Err(NameRuleError::DuplicateName)
    );
}

#[test]
fn edit_path_does_not_collide_with_itself() {
    let roster = vec![employee(1, "OLD NAME")];
    let mut c = employee(1, "John Doe");
    assert!(validate_employee_name(&mut c, &roster).is_ok());
    assert_eq!(c.name, "John DOE");
}

#[test]
fn canonical_form_written_back_even_when_duplicate() {
    let roster = vec![employee(1, "John Doe")];
    let mut c = employee(0, "john doe");
    assert_eq!(
        validate_employee_name(&mut c, &roster),
        Err(NameRuleError::DuplicateName)
    );
    assert_eq!(c.name, "John DOE");
}

#[test]
fn service_round_trip() {
    use employee_backend::services::EmployeesService;
    use employee_backend::store::EmployeeStore;

    let store = EmployeeStore::new();
    let created = EmployeesService::create(&store, employee(0, "juan carlos chamizo")).unwrap();
    assert_eq!(created.name, "Juan Carlos CHAMIZO");
    assert!(created.created_date.is_some());

    let fetched = EmployeesService::get_by_id(&store, created.id).unwrap();
    assert_eq!(fetched, created);

    EmployeesService::delete(&store, created.id).unwrap();
    assert!(EmployeesService::list(&store).unwrap().is_empty());
}
