pub mod commands;
pub mod check;

pub use commands::{Cli, CheckArgs};
