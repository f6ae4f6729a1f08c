//! Errors raised while packing or unpacking.

/// The failure modes of packing and unpacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The buffer ended before the requested bytes could be read or written.
    UnexpectedEof,
    /// An enum alternative index in the stream is outside the statically
    /// known range.
    InvalidVariant,
    /// A `bool` byte in the stream is neither 0 nor 1.
    InvalidBool,
    /// A string's bytes in the stream are not valid UTF-8.
    InvalidUtf8,
    /// A length or index in the stream does not fit the host's `usize`.
    LengthOverflow,
}

/// An error, together with the path of the member it occurred in.
///
/// Every error is fatal to the `pack` or `unpack` call that raised it; there
/// is no partial result to recover. The member path is collected as the error
/// unwinds out of nested composites, so `err.to_string()` reads like
/// `.wells.rates: end of buffer reached, cannot read/write more data`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    kind: ErrorKind,
    item: Item,
}

/// The member path an [`Error`] occurred in, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    path: Vec<String>,
}

//------------------------------------------------------------------------------
// Error implementations
//------------------------------------------------------------------------------

impl Error {
    /// The kind of failure, without the member path.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Record that the error unwound out of the member named `ident`.
    ///
    /// The derive macros call this for every field an error propagates
    /// through; hand-written impls may do the same.
    pub fn enclose(self, ident: &str) -> Self {
        Self { kind: self.kind, item: self.item.enclose(ident) }
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.item.is_empty() {
            write!(f, "{}: {}", self.item, self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(value: ErrorKind) -> Self {
        Self { kind: value, item: Item::default() }
    }
}

//------------------------------------------------------------------------------
// ErrorKind implementations
//------------------------------------------------------------------------------

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ErrorKind::*;
        match self {
            UnexpectedEof => write!(f, "end of buffer reached, cannot read/write more data"),
            InvalidVariant => write!(f, "the alternative index does not correspond to an enum variant"),
            InvalidBool => write!(f, "the numeric value does not correspond to a bool"),
            InvalidUtf8 => write!(f, "the string bytes are not valid UTF-8"),
            LengthOverflow => write!(f, "the length does not fit this platform's usize"),
        }
    }
}

//------------------------------------------------------------------------------
// Item implementations
//------------------------------------------------------------------------------

impl Item {
    /// True when no member path has been recorded.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Push a member name onto the path.
    pub fn enclose(mut self, ident: &str) -> Self {
        self.path.push(ident.into());
        self
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for ident in self.path.iter().rev() {
            write!(f, ".{ident}")?;
        }
        Ok(())
    }
}
