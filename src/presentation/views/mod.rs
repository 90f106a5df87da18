pub mod employees;
pub mod form;
