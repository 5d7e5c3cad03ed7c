//! Command Line Interface for the Shabda index.

pub mod args;
pub mod commands;
pub mod interactive;
pub mod output;

pub use args::*;
pub use commands::*;
pub use interactive::run_interactive;
pub use output::*;
