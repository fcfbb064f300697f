use crate::{
    error::{AppError, AppResult},
    models::employee::Employee,
    store::EmployeeStore,
    validation::employee::validate_employee_name,
};

/// Business rules for the employee roster. Every write path runs the
/// shared name rule engine; the HTTP layer never re-implements it.
pub struct EmployeesService;

impl EmployeesService {
    pub fn list(store: &EmployeeStore) -> AppResult<Vec<Employee>> {
        store.list()
    }

    pub fn get_by_id(store: &EmployeeStore, id: i32) -> AppResult<Employee> {
        store
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Employee"))
    }

    /// Validates and canonicalizes the candidate, stamps the creation time
    /// server side, and stores it under a fresh id.
    pub fn create(store: &EmployeeStore, mut employee: Employee) -> AppResult<Employee> {
        let roster = store.list()?;
        validate_employee_name(&mut employee, &roster)?;

        employee.created_date = Some(chrono::Utc::now());
        let stored = store.insert(employee)?;
        tracing::info!(employee_id = stored.id, name = %stored.name, "employee created");
        Ok(stored)
    }

    /// Validates and canonicalizes the candidate, then overwrites the name
    /// of the record it edits. The roster snapshot taken before validation
    /// still contains the record's old name; the engine's same-id exclusion
    /// keeps it from colliding with itself.
    pub fn update(store: &EmployeeStore, mut employee: Employee) -> AppResult<Employee> {
        let roster = store.list()?;
        validate_employee_name(&mut employee, &roster)?;

        let updated = store
            .update_name(employee.id, &employee.name)?
            .ok_or_else(|| AppError::not_found("Employee"))?;
        tracing::info!(employee_id = updated.id, name = %updated.name, "employee updated");
        Ok(updated)
    }

    pub fn delete(store: &EmployeeStore, id: i32) -> AppResult<()> {
        if !store.delete(id)? {
            return Err(AppError::not_found("Employee"));
        }
        tracing::info!(employee_id = id, "employee deleted");
        Ok(())
    }
}
