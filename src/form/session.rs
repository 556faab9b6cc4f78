//! Form rounds: a dedicated thread drives the surface while the caller blocks
//! on a two-channel rendezvous. Exactly one submission-or-termination outcome
//! is signaled per round; validated values cross the boundary inside the
//! outcome, so no mutable state is shared across threads.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::UiError;
use crate::form::submit::{validate_submission, FieldError, RawField};
use crate::parameter::{ModeSet, ParamValue};

/// What the surface reported for one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The user confirmed the active mode's inputs.
    Submit { mode: String, fields: Vec<RawField> },
    /// The user closed the surface or invoked the escape action.
    Quit,
}

/// The signal released to the caller, exactly once per round.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Submitted {
        mode: String,
        values: IndexMap<String, ParamValue>,
    },
    Terminated,
}

/// The narrow contract the parameter model feeds into: everything widget- and
/// toolkit-specific lives behind this trait.
pub trait FormSurface: Send {
    /// Present the form and block until the user submits or quits. Mode
    /// switching is a surface affordance; the chosen mode comes back in the
    /// event.
    fn next_submission(&mut self, modes: &ModeSet) -> SurfaceEvent;

    /// Mark the given fields as failed. An empty slice clears all markers.
    fn mark_errors(&mut self, errors: &[FieldError]);

    /// A submission fully validated: inputs are disabled and the live output
    /// surface opens while the caller's round runs.
    fn begin_execution(&mut self) {}

    /// The caller's round finished; inputs are re-enabled for another round.
    fn end_execution(&mut self) {}
}

/// Drives a [`FormSurface`] on its own thread and hands one [`RoundOutcome`]
/// to the caller per requested round.
pub struct FormDriver {
    round_tx: SyncSender<()>,
    outcome_rx: Receiver<RoundOutcome>,
    handle: Option<JoinHandle<()>>,
}

impl FormDriver {
    pub fn spawn(modes: ModeSet, surface: Box<dyn FormSurface>) -> Self {
        let (round_tx, round_rx) = mpsc::sync_channel::<()>(0);
        let (outcome_tx, outcome_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut modes = modes;
            let mut surface = surface;
            let mut first_round = true;
            while round_rx.recv().is_ok() {
                if !first_round {
                    surface.end_execution();
                }
                first_round = false;

                let outcome = run_round(&mut modes, surface.as_mut());
                let terminated = matches!(outcome, RoundOutcome::Terminated);
                if outcome_tx.send(outcome).is_err() || terminated {
                    break;
                }
            }
        });

        Self {
            round_tx,
            outcome_rx,
            handle: Some(handle),
        }
    }

    /// Request one round of input and block until its outcome. The next round
    /// cannot start before the previous outcome was observed here.
    pub fn next_round(&self) -> Result<RoundOutcome, UiError> {
        self.round_tx.send(()).map_err(|_| UiError::Disconnected)?;
        self.outcome_rx.recv().map_err(|_| UiError::Disconnected)
    }

    /// Wait for the surface thread to finish.
    pub fn join(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the request sender unblocks the thread's recv loop.
        let (stub_tx, _stub_rx) = mpsc::sync_channel(0);
        drop(std::mem::replace(&mut self.round_tx, stub_tx));
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("form surface thread panicked during shutdown");
            }
        }
    }
}

impl Drop for FormDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One round: keep collecting submissions until every field of the chosen
/// mode validates, or the user quits. Failed submissions mark their fields
/// and leave the surface armed for correction.
fn run_round(modes: &mut ModeSet, surface: &mut dyn FormSurface) -> RoundOutcome {
    loop {
        match surface.next_submission(modes) {
            SurfaceEvent::Quit => return RoundOutcome::Terminated,
            SurfaceEvent::Submit { mode, fields } => {
                let Some(specs) = modes.get(&mode) else {
                    debug!(mode = %mode, "surface submitted an unknown mode");
                    surface.mark_errors(&[FieldError {
                        name: mode,
                        message: "unknown mode".to_string(),
                    }]);
                    continue;
                };

                match validate_submission(specs, &fields) {
                    Ok(values) => {
                        surface.mark_errors(&[]);
                        surface.begin_execution();
                        if let Some(specs) = modes.get_mut(&mode) {
                            for spec in specs.iter_mut() {
                                if let Some(value) = values.get(spec.name()) {
                                    spec.set_value(value.clone());
                                }
                            }
                        }
                        return RoundOutcome::Submitted { mode, values };
                    }
                    Err(errors) => {
                        debug!(mode = %mode, failed = errors.len(), "submission blocked");
                        surface.mark_errors(&errors);
                    }
                }
            }
        }
    }
}
