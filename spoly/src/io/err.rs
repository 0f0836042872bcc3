use derive_more::Display;

#[derive(Debug, Display)]
pub enum ReadError {
    #[display("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[display("{_0}")]
    Io(std::io::Error)
}

impl ReadError {
    pub fn malformed<S>(line: usize, reason: S) -> Self
    where S: Into<String> {
        Self::MalformedInput { line, reason: reason.into() }
    }

    // 1-based line of malformed input.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { line, .. } => Some(*line),
            Self::Io(_) => None
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
