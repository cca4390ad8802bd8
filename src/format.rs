use core::fmt::{self, Display, Formatter, Write};
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::levels::Severity;

/// `ctime` layout without the trailing newline, always 24 characters wide.
const CALENDAR_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// A duration printed as seconds with millisecond precision (`12.034`).
///
/// Sub-millisecond remainders are truncated, not rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seconds(pub Duration);

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let millis = self.0.as_millis();
        write!(f, "{}.{:03}", millis / 1000, millis % 1000)
    }
}

/// Joins every part in order, with no separator between them.
pub(crate) fn concat(parts: &[&dyn Display]) -> String {
    let mut body = String::new();
    for part in parts {
        // Writing into a String cannot fail.
        let _ = write!(body, "{}", part);
    }
    body
}

pub(crate) fn calendar(now: &DateTime<Local>) -> String {
    now.format(CALENDAR_FORMAT).to_string()
}

/// `<tag><timestamp> +<S.mmm> s <body>\n`
pub(crate) fn render_line(
    severity: Severity,
    now: &DateTime<Local>,
    elapsed: Duration,
    body: &str,
) -> String {
    let mut line = String::with_capacity(48 + body.len());
    line.push_str(severity.tag());
    line.push_str(&calendar(now));
    let _ = write!(line, " +{} s ", Seconds(elapsed));
    line.push_str(body);
    line.push('\n');
    line
}
