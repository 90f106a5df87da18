pub mod catalog;
pub mod employees;
pub mod form;
