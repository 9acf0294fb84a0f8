//! CLI argument parsing for the survey binary.

mod args;

pub use args::{parse_args, print_usage, Command, VERSION};
