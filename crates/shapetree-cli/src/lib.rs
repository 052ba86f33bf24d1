mod args;
mod commands;
mod input;

pub use args::{Cli, ColorMode};
pub use commands::run;
