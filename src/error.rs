use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Reqwest(reqwest::Error),
    UserNotFound,
    InventoryHidden,
    InvalidSubstatLevel(u8),
    InvalidSubstatLevels(usize),
    UnknownSlot(u8),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Reqwest(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{}", e),
            Self::Json(e) => write!(f, "{}", e),
            Self::Reqwest(e) => write!(f, "{}", e),
            Self::UserNotFound => write!(f, "user inventory not found"),
            Self::InventoryHidden => write!(f, "user artifacts are hidden"),
            Self::InvalidSubstatLevel(level) => {
                write!(f, "sub-stat level {} is outside 1..=4", level)
            }
            Self::InvalidSubstatLevels(len) => {
                write!(f, "expected 4 sub-stat levels, got {}", len)
            }
            Self::UnknownSlot(id) => write!(f, "unknown slot id {}", id),
        }
    }
}

impl std::error::Error for Error {}
