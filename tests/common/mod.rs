use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use console_logging::{Logger, Severity, Streams};

/// In-memory writer shared between a logger and the test reading it.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[allow(dead_code)]
pub fn capturing(threshold: Severity) -> (Logger, Capture, Capture) {
    let out = Capture::default();
    let err = Capture::default();
    let logger = Logger::builder()
        .threshold(threshold)
        .streams(Streams::new(out.clone(), err.clone()))
        .build();
    (logger, out, err)
}

/// Body of a rendered line: everything after the elapsed-time suffix.
#[allow(dead_code)]
pub fn body(line: &str) -> &str {
    line.split_once(" s ").map(|(_, body)| body).unwrap_or("")
}
