mod command_runner;
mod console;

pub use command_runner::*;
pub use console::*;
