pub mod api;
pub mod employee;

pub use api::{ApiResponse, ErrorDetail, ResponseMeta};
pub use employee::Employee;
