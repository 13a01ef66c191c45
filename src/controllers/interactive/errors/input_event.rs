use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEventParseError {
    UnknownEvent(String),
    InvalidPosition(String),
}

impl fmt::Display for InputEventParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEvent(event) => write!(
                f,
                "unknown event '{}', expected press:x,y, drag:x,y, release, more, less, in or out",
                event
            ),
            Self::InvalidPosition(position) => {
                write!(f, "invalid position '{}', expected x,y", position)
            }
        }
    }
}

impl Error for InputEventParseError {}
