//! Builds a clap command at runtime from a list of parameter specs.
//!
//! Identifier tokens are the short/long flags when either is set (destination
//! bound to the parameter name), otherwise the bare name becomes a positional
//! token. Validators are wrapped into clap value parsers so any failure is
//! reported through the parser's own convention: usage text on standard error
//! and a non-zero exit.

use clap::{Arg, ArgAction, Command};

use crate::parameter::{Arity, ParamValue, ParameterSpec, Validator};

/// Assemble the argument grammar for one mode's specs.
pub fn build_command(
    name: &str,
    version: &str,
    about: Option<&str>,
    specs: &[ParameterSpec],
) -> Command {
    let mut command = Command::new(name.to_string()).version(version.to_string());
    if let Some(about) = about {
        command = command.about(about.to_string());
    }
    for spec in specs {
        command = command.arg(arg_for(spec));
    }
    command
}

fn arg_for(spec: &ParameterSpec) -> Arg {
    let mut arg = Arg::new(spec.name().to_string());

    if let Some(flag) = spec.short() {
        arg = arg.short(flag);
    }
    if let Some(flag) = spec.long() {
        arg = arg.long(flag.to_string());
    }

    arg = match spec.arity() {
        Arity::Flag => {
            // A truthy default inverts the stored action: present means false.
            if spec.default().is_truthy() {
                arg.action(ArgAction::SetFalse)
            } else {
                arg.action(ArgAction::SetTrue)
            }
        }
        Arity::One => {
            let arg = arg.action(ArgAction::Set);
            if spec.is_flagged() {
                arg
            } else {
                arg.required(true)
            }
        }
        Arity::Optional => arg.action(ArgAction::Set).num_args(0..=1),
        Arity::ZeroOrMore => arg.action(ArgAction::Append).num_args(0..),
        Arity::OneOrMore => {
            let arg = arg.action(ArgAction::Append).num_args(1..);
            if spec.is_flagged() {
                arg
            } else {
                arg.required(true)
            }
        }
    };

    if spec.arity().takes_value() {
        arg = arg.value_parser(scalar_parser(spec.validator().clone()));
        if let Some(meta) = spec.meta() {
            arg = arg.value_name(meta.to_string());
        }
    }

    if let Some(help) = help_text(spec) {
        arg = arg.help(help);
    }

    arg
}

/// Per-token value parser running the spec's validator. Defaults are applied
/// at extraction time instead of here, so a default never has to survive its
/// own validator.
fn scalar_parser(
    validator: Validator,
) -> impl Fn(&str) -> Result<ParamValue, String> + Clone + Send + Sync + 'static {
    move |raw: &str| validator.run_scalar(raw)
}

fn help_text(spec: &ParameterSpec) -> Option<String> {
    let default_note = if spec.arity().takes_value() && spec.default() != &ParamValue::None {
        Some(format!("[default: {}]", spec.default()))
    } else {
        None
    };
    match (spec.help(), default_note) {
        (Some(help), Some(note)) => Some(format!("{} {}", help, note)),
        (Some(help), None) => Some(help.to_string()),
        (None, Some(note)) => Some(note),
        (None, None) => None,
    }
}
