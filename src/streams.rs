use std::io::{self, Write};

/// Where a rendered line ends up.
///
/// `Diagnostic` and `Error` share the standard error writer, the same way a
/// terminal shows buffered and unbuffered stderr through one descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Diagnostic,
    Output,
    Error,
}

/// The two writers every line is routed to.
pub struct Streams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Streams {
    /// Process standard output and standard error.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Arbitrary writers standing in for standard output and standard error.
    pub fn new<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    pub(crate) fn writer(&mut self, destination: Destination) -> &mut dyn Write {
        match destination {
            Destination::Output => &mut *self.out,
            Destination::Diagnostic | Destination::Error => &mut *self.err,
        }
    }

    /// Writes one complete line and flushes it.
    ///
    /// Errors are dropped: a broken pipe must never turn a log call into a
    /// failure of the caller.
    pub(crate) fn emit(&mut self, destination: Destination, line: &str) {
        let writer = self.writer(destination);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl Default for Streams {
    fn default() -> Self {
        Self::stdio()
    }
}

impl std::fmt::Debug for Streams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}
