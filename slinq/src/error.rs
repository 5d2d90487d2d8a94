use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

/// Slinq error code
///
/// Only the operations that need at least one (or exactly one) element, and
/// `chunk`, can fail. All errors are recoverable: the caller's input is
/// never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Empty sequence.
    ///
    /// The operation requires at least one element but the sequence was
    /// empty. Raised by `first` and `single`.
    EmptySequence,
    /// No element matches.
    ///
    /// The sequence was not empty, but no element satisfied the predicate.
    /// Raised by `first`.
    NoMatch,
    /// More than one element matches.
    ///
    /// A unique match was required but at least two elements satisfied the
    /// predicate. Raised by `single`.
    MultipleMatches,
    /// Invalid parameter.
    ///
    /// A structurally invalid argument was passed, such as a chunk size of
    /// zero. Raised by `chunk`.
    InvalidParameter,
}

static_assertions::assert_eq_size!(Error, [u8; 1]);
static_assertions::assert_impl_all!(Error: Send, Sync, Copy);

impl Error {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        match self.get_documentation() {
            Some(documentation) => documentation
                .split_once("\n\n")
                .unwrap_or((documentation, "")),
            None => ("", ""),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
