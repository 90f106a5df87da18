pub mod departments;
pub mod options;
