pub mod age;
pub mod catalog;
pub mod employees;
pub mod experience;
pub mod photo;
