use std::fmt;

/// Result type for usagelens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when querying usage metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested month is outside the 0-indexed calendar range (0 = January, 11 = December)
    MonthOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MonthOutOfRange(month) => {
                write!(f, "month {} is out of range (expected 0..=11)", month)
            }
        }
    }
}

impl std::error::Error for Error {}
