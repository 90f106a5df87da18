#[path = "../common/mod.rs"]
pub mod common;

mod cli_commands_test;
mod employees_round_trip_test;
