//! Console implementation of the form surface over dialoguer prompts.
//!
//! This is interface plumbing behind [`FormSurface`]; the form logic never
//! depends on it. Pickers and free text render as pre-filled input prompts,
//! masked fields as password prompts, checkboxes as confirm prompts. Escape
//! or a closed input stream counts as the quit action.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::form::placeholder::guidance;
use crate::form::session::{FormSurface, SurfaceEvent};
use crate::form::submit::{FieldError, RawField};
use crate::parameter::{ModeSet, ParamValue, ParameterSpec, WidgetHint};

pub struct ConsoleForm {
    theme: ColorfulTheme,
    errors: Vec<FieldError>,
}

impl ConsoleForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            errors: Vec::new(),
        }
    }

    fn pick_mode(&self, modes: &ModeSet) -> Option<String> {
        let names: Vec<&str> = modes.names().collect();
        if names.len() == 1 {
            // Degraded switcher: a static label.
            println!("{}", names[0].bold());
            return Some(names[0].to_string());
        }
        match Select::with_theme(&self.theme)
            .with_prompt("Mode")
            .items(&names)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => Some(names[index].to_string()),
            Ok(None) => None,
            Err(err) => {
                debug!(error = %err, "mode selection failed");
                None
            }
        }
    }

    fn show_errors(&self) {
        for error in &self.errors {
            eprintln!("{}", format!("{}: {}", error.name, error.message).red());
        }
    }

    fn prompt_field(&self, spec: &ParameterSpec) -> Result<RawField, dialoguer::Error> {
        if let Some(help) = spec.help() {
            println!("  {}", help.dimmed());
        }
        let marked = self.errors.iter().any(|e| e.name == spec.name());
        let label = if marked {
            format!("{}", spec.name().red())
        } else {
            spec.name().to_string()
        };

        match spec.widget() {
            WidgetHint::Checkbox => {
                let state = Confirm::with_theme(&self.theme)
                    .with_prompt(label)
                    .default(spec.value().is_truthy())
                    .interact()?;
                Ok(RawField::Toggle(state))
            }
            WidgetHint::Password => {
                let text = Password::with_theme(&self.theme)
                    .with_prompt(label)
                    .allow_empty_password(true)
                    .interact()?;
                Ok(RawField::Text(text))
            }
            widget => {
                let initial = match spec.value() {
                    ParamValue::None => guidance(widget).to_string(),
                    value => value.to_string(),
                };
                let text = Input::<String>::with_theme(&self.theme)
                    .with_prompt(label)
                    .with_initial_text(initial)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(RawField::Text(text))
            }
        }
    }
}

impl Default for ConsoleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for ConsoleForm {
    fn next_submission(&mut self, modes: &ModeSet) -> SurfaceEvent {
        let Some(mode) = self.pick_mode(modes) else {
            return SurfaceEvent::Quit;
        };
        self.show_errors();

        let specs = match modes.get(&mode) {
            Some(specs) => specs,
            None => return SurfaceEvent::Quit,
        };

        let mut fields = Vec::with_capacity(specs.len());
        for spec in specs {
            match self.prompt_field(spec) {
                Ok(field) => fields.push(field),
                Err(err) => {
                    debug!(parameter = spec.name(), error = %err, "prompt aborted");
                    return SurfaceEvent::Quit;
                }
            }
        }
        SurfaceEvent::Submit { mode, fields }
    }

    fn mark_errors(&mut self, errors: &[FieldError]) {
        self.errors = errors.to_vec();
    }

    fn begin_execution(&mut self) {
        println!("{}", "── running ──".dimmed());
    }

    fn end_execution(&mut self) {
        println!("{}", "── ready for another round ──".dimmed());
    }
}
