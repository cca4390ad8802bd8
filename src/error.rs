use std::fmt::Formatter;

pub enum LoggerError {
    InvalidSeverity(String),
    Io(std::io::Error),

    #[cfg(feature = "log")]
    FacadeAlreadySet,
}

fn format_logger_error(l: &LoggerError, fmt: &mut Formatter) -> std::fmt::Result {
    match l {
        LoggerError::InvalidSeverity(value) => {
            write!(fmt, "Invalid Severity: {:?}", value)
        }
        LoggerError::Io(e) => {
            write!(fmt, "IoError: {}", e)
        }
        #[cfg(feature = "log")]
        LoggerError::FacadeAlreadySet => {
            write!(fmt, "A log facade logger is already installed")
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Io(e)
    }
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::fmt::Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            _ => None,
        }
    }
}
