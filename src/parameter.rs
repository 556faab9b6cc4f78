//! Parameter model: the single source of truth shared by both interface surfaces.

mod modes;
mod registry;
mod spec;
mod validate;

pub use modes::ModeSet;
pub use registry::FlagRegistry;
pub use spec::{Arity, ParameterSpec, ParameterSpecBuilder, WidgetHint};
pub use validate::{ParamValue, Validator, ValueType};
