//! CLI invocation: parse the argument list against the built grammar, extract
//! validated values keyed by parameter name, and run the callback exactly once
//! on full success. There is no retry loop on this surface.

use clap::Command;
use indexmap::IndexMap;

use crate::parameter::{Arity, ParamValue, ParameterSpec};

/// Parse `args` and extract one validated value per spec. Absent parameters
/// fall back to their declared default without passing through the validator.
pub fn parse_values(
    specs: &[ParameterSpec],
    command: Command,
    args: Vec<String>,
) -> Result<IndexMap<String, ParamValue>, clap::Error> {
    let matches = command.try_get_matches_from(args)?;
    let mut values = IndexMap::new();
    for spec in specs {
        let value = match spec.arity() {
            Arity::Flag => ParamValue::Bool(matches.get_flag(spec.name())),
            Arity::ZeroOrMore | Arity::OneOrMore => {
                match matches.get_many::<ParamValue>(spec.name()) {
                    Some(items) => ParamValue::List(items.cloned().collect()),
                    None => spec.default().clone(),
                }
            }
            Arity::One | Arity::Optional => match matches.get_one::<ParamValue>(spec.name()) {
                Some(value) => value.clone(),
                None => spec.default().clone(),
            },
        };
        values.insert(spec.name().to_string(), value);
    }
    Ok(values)
}

/// Write a validated value map back into the specs' current values.
pub fn apply_values(specs: &mut [ParameterSpec], values: &IndexMap<String, ParamValue>) {
    for spec in specs.iter_mut() {
        if let Some(value) = values.get(spec.name()) {
            spec.set_value(value.clone());
        }
    }
}

/// Parse, record, and invoke: the whole command-line round in one call.
/// Parse and validation failures surface as the parser's own error, which the
/// binary reports via its usage convention and a non-zero exit.
pub fn run_cli<F>(
    specs: &mut [ParameterSpec],
    command: Command,
    args: Vec<String>,
    callback: &mut F,
) -> Result<(), clap::Error>
where
    F: FnMut(&IndexMap<String, ParamValue>),
{
    let values = parse_values(specs, command, args)?;
    apply_values(specs, &values);
    callback(&values);
    Ok(())
}
