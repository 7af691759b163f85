use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

/// The broad failure categories a constant pool operation can fall into.
///
/// Every [`Error`] maps onto exactly one kind through [`Error::kind`]. Callers that process a
/// batch of class files typically only care about the kind: all of them abort the current file,
/// none of them are worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The byte stream itself is broken: unknown tag, truncated data, undecodable string.
    Format,
    /// An index is zero, beyond the pool, or points at a slot that holds no entry.
    Reference,
    /// An entry exists but is not of the variant the caller or the referencing entry requires.
    TypeMismatch,
    /// Entries reference each other in a way no well-formed pool can (cycles, runaway nesting).
    Structural,
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Decoding is all-or-nothing: any error raised while reading or resolving a pool means no
/// [`crate::ConstantPool`] is produced. Errors raised by the typed accessors and rendering
/// helpers afterwards only concern the single lookup that failed.
///
/// # Error Categories
///
/// ## Format errors
/// - [`Error::Malformed`] - Unknown tag byte or undecodable string record
/// - [`Error::OutOfBounds`] - The stream ended before the pool was complete
///
/// ## Reference errors
/// - [`Error::InvalidIndex`] - Index 0 or an index at or beyond the pool count
/// - [`Error::UnusableEntry`] - Index of the reserved slot following a `Long` or `Double`
///
/// ## Type errors
/// - [`Error::TypeMismatch`] - The entry has a different variant than required
///
/// ## Structural errors
/// - [`Error::CircularReference`] - Entries reference each other in a loop
/// - [`Error::RecursionLimit`] - Resolution nested deeper than the configured limit
///
/// # Examples
///
/// ```rust
/// use classpool::{ConstantPool, Error, ErrorKind};
///
/// // count = 2, followed by the unknown tag 2
/// let data = [0x00, 0x02, 0x02];
/// match ConstantPool::from_bytes(&data) {
///     Err(Error::Malformed { message, .. }) => println!("broken pool: {}", message),
///     Err(e) if e.kind() == ErrorKind::Reference => println!("dangling index: {}", e),
///     Err(e) => println!("other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The pool is damaged and could not be parsed.
    ///
    /// Raised for tag bytes outside the known set and for `Utf8` records that are not valid
    /// modified UTF-8. Includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound read was attempted while parsing the pool.
    ///
    /// The input ended in the middle of the count field or of an entry's fixed fields.
    #[error("Out of Bound read would have occurred - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The index is zero or not smaller than the pool count.
    #[error("Constant pool index {index} is out of range (count {count})")]
    InvalidIndex {
        /// The offending index
        index: u16,
        /// The count field of the pool
        count: u16,
    },

    /// The index is in range but the slot holds no entry.
    ///
    /// This is the slot right after a `Long` or `Double` entry, which the class file format
    /// reserves and never fills.
    #[error("Constant pool index {0} refers to an unusable slot")]
    UnusableEntry(u16),

    /// The entry at `index` exists but is not of an acceptable variant.
    #[error("Constant pool entry {index} is {found}, expected {expected}")]
    TypeMismatch {
        /// The offending index
        index: u16,
        /// What the lookup accepts, e.g. `Class` or `Integer|Float|Class|String`
        expected: &'static str,
        /// The variant actually stored at `index`
        found: &'static str,
    },

    /// Resolution reached an entry that is already being resolved.
    ///
    /// The class file format never allows this; it indicates corrupt or adversarial input.
    #[error("Circular reference detected while resolving constant pool entry {0}")]
    CircularReference(u16),

    /// Recursion limit reached.
    ///
    /// Resolution chains in a well-formed pool are at most three entries deep, so exceeding
    /// the configured depth indicates corrupt input. The value is the limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}

impl Error {
    /// Returns the broad category of this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classpool::{Error, ErrorKind};
    ///
    /// let err = Error::UnusableEntry(2);
    /// assert_eq!(err.kind(), ErrorKind::Reference);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed { .. } | Error::OutOfBounds { .. } => ErrorKind::Format,
            Error::InvalidIndex { .. } | Error::UnusableEntry(_) => ErrorKind::Reference,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::CircularReference(_) | Error::RecursionLimit(_) => ErrorKind::Structural,
        }
    }
}
