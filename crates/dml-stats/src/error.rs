use std::error::Error;
use std::fmt;
use std::io;

/// Failures reported by the table and vector operations.
#[derive(Debug)]
pub enum DmlError {
    /// Argument outside the operation's domain (e.g. zero preview lines).
    InvalidArgument(String),
    ColumnOutOfRange { col: usize, cols: usize },
    /// Table with no rows or no columns.
    EmptyTable,
    /// Scaling bounds that span a zero-width interval.
    DegenerateRange { lower: f32, upper: f32 },
    /// The allocator could not provide `len` slots.
    Allocation { len: usize },
    Io(io::Error),
}

impl fmt::Display for DmlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DmlError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            DmlError::ColumnOutOfRange { col, cols } => {
                write!(f, "Column {} is out of range for a table with {} columns", col, cols)
            }
            DmlError::EmptyTable => write!(f, "Table has no rows or no columns"),
            DmlError::DegenerateRange { lower, upper } => write!(
                f,
                "Lower bound {} and upper bound {} describe an empty range",
                lower, upper
            ),
            DmlError::Allocation { len } => {
                write!(f, "Failed to allocate a vector of {} values", len)
            }
            DmlError::Io(err) => write!(f, "Failed to write output: {}", err),
        }
    }
}

impl Error for DmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DmlError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DmlError {
    fn from(err: io::Error) -> Self {
        DmlError::Io(err)
    }
}
