pub mod employee;

pub use employee::{NameRuleError, format_name, validate_employee_name};
