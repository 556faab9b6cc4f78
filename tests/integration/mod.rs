//! Integration test modules.

mod cli_surface;
mod form_rounds;
