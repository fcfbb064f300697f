use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{AppError, AppResult};
use crate::models::employee::Employee;

/// In-process employee table shared behind `AppState`.
///
/// Ids are assigned from a monotonically increasing counter starting at 1,
/// so a candidate id of 0 can never alias a stored record.
#[derive(Default)]
pub struct EmployeeStore {
    inner: RwLock<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    last_id: i32,
    employees: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored records, in insertion order.
    pub fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.read()?.employees.clone())
    }

    pub fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        Ok(self.read()?.employees.iter().find(|e| e.id == id).cloned())
    }

    /// Stores a new record, assigning it the next id. The caller's id field
    /// is ignored.
    pub fn insert(&self, mut employee: Employee) -> AppResult<Employee> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        employee.id = inner.last_id;
        inner.employees.push(employee.clone());
        Ok(employee)
    }

    /// Overwrites the name of an existing record. Returns `None` when no
    /// record has the given id.
    pub fn update_name(&self, id: i32, name: &str) -> AppResult<Option<Employee>> {
        let mut inner = self.write()?;
        match inner.employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.name = name.to_string();
                Ok(Some(employee.clone()))
            }
            None => Ok(None),
        }
    }

    /// Removes a record. Returns `false` when no record had the given id.
    pub fn delete(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.write()?;
        let before = inner.employees.len();
        inner.employees.retain(|e| e.id != id);
        Ok(inner.employees.len() != before)
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| AppError::internal("employee store lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| AppError::internal("employee store lock poisoned"))
    }
}
