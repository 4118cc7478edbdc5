use std::error;
use std::fmt;

/// An error that occurs while building a range list.
///
/// Both kinds signal malformed input or a caller that did not sort its
/// ranges. Neither is recoverable: a half-built table must not be emitted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of error that occurred while building a range list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A range was constructed with its start after its end.
    InvalidRange {
        /// The requested start of the range.
        start: u32,
        /// The requested end of the range.
        end: u32,
    },
    /// A range was added whose start does not come strictly after the end of
    /// the range most recently added to the list.
    OrderingViolation {
        /// The start of the range already in the list.
        last_start: u32,
        /// The end of the range already in the list.
        last_end: u32,
        /// The start of the rejected range.
        start: u32,
        /// The end of the rejected range.
        end: u32,
    },
}

impl Error {
    pub(crate) fn invalid_range(start: u32, end: u32) -> Error {
        Error { kind: ErrorKind::InvalidRange { start, end } }
    }

    pub(crate) fn ordering_violation(
        last: (u32, u32),
        new: (u32, u32),
    ) -> Error {
        Error {
            kind: ErrorKind::OrderingViolation {
                last_start: last.0,
                last_end: last.1,
                start: new.0,
                end: new.1,
            },
        }
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Unwrap this error into its underlying kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns true if and only if this error was raised while constructing
    /// a range.
    pub fn is_invalid_range(&self) -> bool {
        match self.kind {
            ErrorKind::InvalidRange { .. } => true,
            _ => false,
        }
    }

    /// Returns true if and only if this error was raised because ranges were
    /// added out of order or overlapping.
    pub fn is_ordering_violation(&self) -> bool {
        match self.kind {
            ErrorKind::OrderingViolation { .. } => true,
            _ => false,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange { start, end } => write!(
                f,
                "invalid range {:04X}..{:04X}: start is after end",
                start, end,
            ),
            ErrorKind::OrderingViolation {
                last_start,
                last_end,
                start,
                end,
            } => write!(
                f,
                "range {:04X}..{:04X} must come after {:04X}..{:04X} \
                 (ranges must be added in ascending order without overlap)",
                start, end, last_start, last_end,
            ),
        }
    }
}
