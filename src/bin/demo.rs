//! Genui demo binary
//!
//! Wires the example parameter set through the dual-mode interface: run it
//! from a terminal for the CLI surface, or pass `--gui` for the interactive
//! form with the same parameters and validation.

use anyhow::Result;
use tracing::info;

use genui::logging::{init_logging, LoggingConfig};
use genui::parameter::{Arity, FlagRegistry, ParameterSpec, Validator, WidgetHint};
use genui::ui::{GenericUi, UiOptions};

fn main() -> Result<()> {
    init_logging(Some(&LoggingConfig::default()))?;

    let mut registry = FlagRegistry::new();
    let parameters = vec![
        ParameterSpec::builder("file_path")
            .meta("input file")
            .validator(Validator::function(is_file))
            .help("path to the input file")
            .widget(WidgetHint::File)
            .build(&mut registry)?,
        ParameterSpec::builder("option")
            .short('o')
            .long("option")
            .arity(Arity::Flag)
            .default(false)
            .help("an option that can be left out to default to false")
            .build(&mut registry)?,
    ];

    let ui = GenericUi::new(
        UiOptions::new("Example Tool").version("1.0"),
        parameters,
        |values| {
            info!(file_path = %values["file_path"], option = %values["option"], "arguments received");
            println!("arguments: {} {}", values["file_path"], values["option"]);
        },
    )?;
    ui.run()?;
    Ok(())
}

/// Validate that the value names an existing file and normalize it to an
/// absolute path.
fn is_file(value: &str) -> Result<String, String> {
    let path = std::path::Path::new(value);
    if !path.is_file() {
        return Err(format!("{:?} is no file", value));
    }
    path.canonicalize()
        .map(|absolute| absolute.to_string_lossy().into_owned())
        .map_err(|e| format!("cannot resolve {:?}: {}", value, e))
}
