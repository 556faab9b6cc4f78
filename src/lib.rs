//! Genui: Generic Dual-Mode User Interfaces
//!
//! A single declarative parameter description drives either a command-line
//! parser or an interactive form. The launch mode is chosen automatically from
//! how the process was invoked, with an explicit `--gui` escape hatch.

pub mod cli;
pub mod error;
pub mod form;
pub mod launch;
pub mod logging;
pub mod parameter;
pub mod ui;
