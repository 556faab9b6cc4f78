//! CLI surface: translates parameter specs into a command-line grammar and
//! runs validators during parsing. Grammar construction and invocation only;
//! surface selection lives in `launch` and the shared model in `parameter`.

mod grammar;
mod invoke;

pub use grammar::build_command;
pub use invoke::{apply_values, parse_values, run_cli};
