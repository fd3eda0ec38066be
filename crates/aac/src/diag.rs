//! Diagnostic sink for absorbed errors. The board never propagates
//! malformed writes or codec I/O failures; it reports them here instead.

use std::fmt;

/// Something the board absorbed rather than propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagEvent {
    /// A write arrived without an image location and was dropped. The
    /// category name is empty for the root scope.
    MissingKey { category: String },
    /// The loader skipped a record with no space separator. 1-based.
    MalformedLine { line: usize },
    /// Load or save hit an I/O problem and stopped early.
    Io {
        action: &'static str,
        message: String,
    },
}

impl fmt::Display for DiagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagEvent::MissingKey { category } if category.is_empty() => {
                write!(f, "dropped item with missing image location (root)")
            }
            DiagEvent::MissingKey { category } => {
                write!(
                    f,
                    "dropped item with missing image location (category `{category}`)"
                )
            }
            DiagEvent::MalformedLine { line } => {
                write!(f, "skipped malformed line {line}")
            }
            DiagEvent::Io { action, message } => {
                write!(f, "{action} failed: {message}")
            }
        }
    }
}

/// Receiver for absorbed-error reports. Takes `&self` so channel- and
/// cell-backed sinks work.
pub trait DiagSink {
    fn report(&self, event: DiagEvent);
}

/// Default sink: one line per event on standard error.
pub struct StderrDiag;

impl DiagSink for StderrDiag {
    fn report(&self, event: DiagEvent) {
        eprintln!("aac: {event}");
    }
}
