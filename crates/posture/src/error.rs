use std::fmt;

#[derive(Debug)]
pub enum PostureError {
    Io(String),
    Parse(String),
    InvalidConfig(String),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureError::Io(msg) => write!(f, "io error: {msg}"),
            PostureError::Parse(msg) => write!(f, "parse error: {msg}"),
            PostureError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for PostureError {}

impl From<std::io::Error> for PostureError {
    fn from(err: std::io::Error) -> Self {
        PostureError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PostureError {
    fn from(err: serde_json::Error) -> Self {
        PostureError::Parse(err.to_string())
    }
}
