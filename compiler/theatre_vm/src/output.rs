//! Where `print` and `println` write.
//!
//! The host picks the sink when it builds a VM; every snapshot of that VM
//! shares it through an `Arc`. Each write reaches the sink immediately.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared handle to an [`Output`]; cloned into every VM snapshot.
pub type SharedOutput = Arc<Output>;

/// An output sink.
pub enum Output {
    /// Process stdout, flushed after every write.
    Stdout,
    /// In-memory capture, read back with [`Output::captured`].
    Capture(Mutex<String>),
    /// Any host-provided stream.
    Writer(Mutex<Box<dyn Write + Send>>),
    /// Discards everything.
    Null,
}

impl Output {
    /// Sink that writes to the process's standard output.
    pub fn stdout() -> SharedOutput {
        Arc::new(Output::Stdout)
    }

    /// In-memory sink; read it back with [`Output::captured`].
    pub fn capture() -> SharedOutput {
        Arc::new(Output::Capture(Mutex::new(String::new())))
    }

    /// Wrap an arbitrary stream.
    pub fn writer(stream: impl Write + Send + 'static) -> SharedOutput {
        Arc::new(Output::Writer(Mutex::new(Box::new(stream))))
    }

    /// Sink that discards all output.
    pub fn null() -> SharedOutput {
        Arc::new(Output::Null)
    }

    /// Write `text` as-is.
    ///
    /// I/O failures (a closed pipe, say) are dropped: a script never fails
    /// because its output could not be delivered.
    pub fn write_str(&self, text: &str) {
        match self {
            Output::Stdout => {
                let _ = write_flushed(&mut io::stdout().lock(), text);
            }
            Output::Capture(buffer) => buffer.lock().push_str(text),
            Output::Writer(stream) => {
                let _ = write_flushed(&mut *stream.lock(), text);
            }
            Output::Null => {}
        }
    }

    /// Write `text` followed by a newline.
    pub fn write_line(&self, text: &str) {
        self.write_str(text);
        self.write_str("\n");
    }

    /// Everything captured so far; empty for sinks that do not capture.
    pub fn captured(&self) -> String {
        match self {
            Output::Capture(buffer) => buffer.lock().clone(),
            Output::Stdout | Output::Writer(_) | Output::Null => String::new(),
        }
    }

    /// Drop captured text. No-op for sinks that do not capture.
    pub fn clear(&self) {
        if let Output::Capture(buffer) = self {
            buffer.lock().clear();
        }
    }
}

fn write_flushed(stream: &mut dyn Write, text: &str) -> io::Result<()> {
    stream.write_all(text.as_bytes())?;
    stream.flush()
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Output::Stdout => "Stdout",
            Output::Capture(_) => "Capture",
            Output::Writer(_) => "Writer",
            Output::Null => "Null",
        };
        f.write_str(kind)
    }
}
