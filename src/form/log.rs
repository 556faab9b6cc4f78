//! Log ingestion for the output surface.
//!
//! Redirected output arrives as a stream of fragments. A fragment equal to a
//! line feed commits the buffered text as one visible entry; a fragment equal
//! to a carriage return commits it but marks the next commit to replace that
//! entry in place, supporting progress-style lines. Delivery to an attached
//! observer is best-effort and never propagates back to the producer.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// One committed change to the visible log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogUpdate {
    /// Append the entry at the end of the log.
    Append(String),
    /// Replace the most recent entry in place.
    Replace(String),
}

pub type LogObserver = Box<dyn FnMut(&LogUpdate) -> io::Result<()> + Send>;

#[derive(Default)]
struct LogState {
    buffer: String,
    replace_pending: bool,
    entries: Vec<String>,
}

/// The visible log model shared between the redirected output writer and the
/// surface that displays it.
#[derive(Default)]
pub struct LogSink {
    state: Mutex<LogState>,
    observer: Mutex<Option<LogObserver>>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer notified on every committed entry. Observer
    /// failures are swallowed after a diagnostic; log delivery never
    /// destabilizes the producing code.
    pub fn set_observer(&self, observer: LogObserver) {
        *self.observer.lock() = Some(observer);
    }

    /// Feed one fragment per the ingestion contract: text accumulates, `"\n"`
    /// commits as an append, `"\r"` commits and arms in-place replacement for
    /// the following commit.
    pub fn push_fragment(&self, fragment: &str) {
        let update = {
            let mut state = self.state.lock();
            if fragment != "\n" && fragment != "\r" {
                state.buffer.push_str(fragment);
                return;
            }

            let entry = std::mem::take(&mut state.buffer);
            let replace = state.replace_pending;
            state.replace_pending = fragment == "\r";

            match state.entries.last_mut() {
                Some(last) if replace => {
                    *last = entry.clone();
                    LogUpdate::Replace(entry)
                }
                _ => {
                    state.entries.push(entry.clone());
                    LogUpdate::Append(entry)
                }
            }
        };

        // The state lock is released here so the observer may read the sink.
        if let Some(observer) = self.observer.lock().as_mut() {
            if let Err(err) = observer(&update) {
                debug!(error = %err, "log observer rejected entry");
            }
        }
    }

    /// Split arbitrary text into fragments and feed them: runs of plain text
    /// become one fragment each, every terminator its own fragment.
    pub fn ingest(&self, text: &str) {
        let mut start = 0;
        for (position, ch) in text.char_indices() {
            if ch == '\n' || ch == '\r' {
                if position > start {
                    self.push_fragment(&text[start..position]);
                }
                self.push_fragment(&text[position..position + ch.len_utf8()]);
                start = position + ch.len_utf8();
            }
        }
        if start < text.len() {
            self.push_fragment(&text[start..]);
        }
    }

    /// Snapshot of the visible entries.
    pub fn entries(&self) -> Vec<String> {
        self.state.lock().entries.clone()
    }

    /// Uncommitted tail not yet terminated by a line feed or carriage return.
    pub fn pending(&self) -> String {
        self.state.lock().buffer.clone()
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.buffer.clear();
        state.entries.clear();
        state.replace_pending = false;
    }
}

/// `io::Write` front for a shared [`LogSink`], usable as a tracing writer so
/// output produced during a form round lands in the visible log.
#[derive(Clone)]
pub struct SinkWriter {
    sink: Arc<LogSink>,
}

impl SinkWriter {
    pub fn new(sink: Arc<LogSink>) -> Self {
        Self { sink }
    }
}

impl io::Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.ingest(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SinkWriter {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
