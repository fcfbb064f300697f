pub mod employees_service;

pub use employees_service::EmployeesService;
