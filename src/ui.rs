//! Top-level entry point: couples a mode set and a callback to whichever
//! surface the launch context selects.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::cli::{apply_values, build_command, parse_values};
use crate::error::{ConfigError, UiError};
use crate::form::console::ConsoleForm;
use crate::form::{FormDriver, FormSurface, LogSink, ProgressGauge, RoundOutcome, SinkWriter};
use crate::launch::{select_surface, LaunchOrigin, Surface};
use crate::parameter::{ModeSet, ParamValue, ParameterSpec};

/// Presentation options shared by both surfaces.
#[derive(Debug, Clone)]
pub struct UiOptions {
    /// Window title and command name.
    pub title: String,
    pub version: String,
    pub about: Option<String>,
    /// Override token forcing the form surface from a terminal.
    pub override_token: String,
}

impl UiOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: "1.0".to_string(),
            about: None,
            override_token: "--gui".to_string(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }
}

pub type Callback = Box<dyn FnMut(&IndexMap<String, ParamValue>)>;

/// A generic dual-mode user interface: one parameter description, two
/// surfaces. The callback receives the validated values keyed by parameter
/// name after every fully validated run.
pub struct GenericUi {
    options: UiOptions,
    modes: ModeSet,
    callback: Callback,
    log: Arc<LogSink>,
    progress: Arc<ProgressGauge>,
}

impl GenericUi {
    /// Single-mode interface, keyed by the version label like the degraded
    /// mode switcher displays it.
    pub fn new<F>(
        options: UiOptions,
        parameters: Vec<ParameterSpec>,
        callback: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(&IndexMap<String, ParamValue>) + 'static,
    {
        let modes = ModeSet::single(options.version.clone(), parameters);
        Self::with_modes(options, modes, callback)
    }

    /// Multi-mode interface; exactly one mode is active per run.
    pub fn with_modes<F>(
        options: UiOptions,
        modes: ModeSet,
        callback: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(&IndexMap<String, ParamValue>) + 'static,
    {
        if modes.is_empty() {
            return Err(ConfigError::EmptyModeSet);
        }
        Ok(Self {
            options,
            modes,
            callback: Box::new(callback),
            log: Arc::new(LogSink::new()),
            progress: Arc::new(ProgressGauge::new()),
        })
    }

    /// The visible log model fed by redirected output during form rounds.
    pub fn log(&self) -> Arc<LogSink> {
        Arc::clone(&self.log)
    }

    /// Gauge for external progress reports.
    pub fn progress(&self) -> Arc<ProgressGauge> {
        Arc::clone(&self.progress)
    }

    /// Select a surface from the process arguments and launch origin, then
    /// run it to completion. Parse and validation failures on the CLI surface
    /// terminate the process with the parser's usage message and a non-zero
    /// exit, matching command-line conventions.
    pub fn run(self) -> Result<(), UiError> {
        let args: Vec<String> = std::env::args().collect();
        let origin = LaunchOrigin::detect();
        let (surface, args) = select_surface(args, &origin, &self.options.override_token);
        debug!(?surface, "surface selected");
        match surface {
            Surface::Cli => self.run_cli_exiting(args),
            Surface::Form => self.run_form(Box::new(ConsoleForm::new())),
        }
    }

    fn run_cli_exiting(self, args: Vec<String>) -> Result<(), UiError> {
        match self.run_cli(args) {
            Ok(()) => Ok(()),
            Err(UiError::Parse(err)) => err.exit(),
            Err(err) => Err(err),
        }
    }

    /// One command-line round: build the grammar for the active mode, parse,
    /// validate, invoke the callback exactly once. No retry loop.
    pub fn run_cli(mut self, args: Vec<String>) -> Result<(), UiError> {
        let active = self
            .modes
            .active_default()
            .ok_or(ConfigError::EmptyModeSet)?
            .to_string();
        let specs = self
            .modes
            .get(&active)
            .ok_or_else(|| ConfigError::UnknownMode(active.clone()))?;

        let command = build_command(
            &self.options.title,
            &self.options.version,
            self.options.about.as_deref(),
            specs,
        );
        let values = parse_values(specs, command, args)?;

        if let Some(specs) = self.modes.get_mut(&active) {
            apply_values(specs, &values);
        }
        info!(mode = %active, "arguments validated");
        (self.callback)(&values);
        Ok(())
    }

    /// Run the interactive surface: rounds of input alternate with callback
    /// execution until the user signals termination. Output produced during
    /// the rounds is redirected into the visible log for the lifetime of the
    /// surface and restored on every exit path.
    pub fn run_form(mut self, surface: Box<dyn FormSurface>) -> Result<(), UiError> {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(SinkWriter::new(Arc::clone(&self.log)))
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();
        let _redirect = tracing::subscriber::set_default(subscriber);

        let driver = FormDriver::spawn(self.modes.clone(), surface);
        loop {
            match driver.next_round()? {
                RoundOutcome::Submitted { mode, values } => {
                    // Keep the caller-side spec copies in sync with the round.
                    if let Some(specs) = self.modes.get_mut(&mode) {
                        apply_values(specs, &values);
                    }
                    (self.callback)(&values);
                }
                RoundOutcome::Terminated => break,
            }
        }
        driver.join();
        Ok(())
    }
}
