//! Form surface: validated form submission over the shared parameter model.
//!
//! Widget rendering is an external collaborator behind the [`FormSurface`]
//! trait; this module owns the logic: placeholder semantics, submission
//! validation, the round rendezvous, log ingestion, and progress clamping.
//! A console implementation of the trait ships in [`console`].

pub mod console;
mod log;
mod placeholder;
mod progress;
mod session;
mod submit;

pub use log::{LogObserver, LogSink, LogUpdate, SinkWriter};
pub use placeholder::guidance;
pub use progress::ProgressGauge;
pub use session::{FormDriver, FormSurface, RoundOutcome, SurfaceEvent};
pub use submit::{validate_submission, FieldError, RawField};
