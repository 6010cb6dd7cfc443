//! Utility module with monet's errors.

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. Monet
/// uses it for [`Stop`](crate::scheme::Stop)s, which must fall into `0..=1000`
/// and also be multiples of 10.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An error parsing an [`Rgb`](crate::Rgb) color from `#rrggbb` or `rrggbb`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// The string does not have exactly six ASCII digits after the optional
    /// `#`, as in `#00` or `#💩0000`.
    UnexpectedCharacters,

    /// A coordinate is not a hexadecimal number, as in `#efg000`.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::UnexpectedCharacters => "color should have six hexadecimal digits",
            Self::MalformedHex => "color coordinates should be hexadecimal",
        })
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An error while exporting a generated scheme.
#[derive(Debug)]
pub enum ExportError {
    /// The sink refused the given key, e.g., because it lacks permission.
    Rejected(String),

    /// The sink failed with an I/O error.
    Io(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rejected(key) => write!(f, "sink rejected key {}", key),
            Self::Io(_) => f.write_str("sink failed to write value"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(_) => None,
            Self::Io(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
