pub mod employees;

pub use employees::EmployeeStore;
