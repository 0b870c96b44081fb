//! Definition of errors.

use std::error::Error;
use std::fmt;

/// A specialized Result type for Risparmio.
pub type Result<T, E = RisparmioError> = std::result::Result<T, E>;

/// The error type for Risparmio.
#[derive(Debug)]
pub enum RisparmioError {
    /// The error variant for [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`InvalidFormatError`].
    InvalidFormat(InvalidFormatError),

    /// The error variant for [`InsufficientEdgesError`].
    InsufficientEdges(InsufficientEdgesError),

    /// The error variant for [`ParseIntError`](std::num::ParseIntError).
    ParseInt(std::num::ParseIntError),

    /// The error variant for [`DecodeError`](bincode::error::DecodeError).
    BincodeDecode(bincode::error::DecodeError),

    /// The error variant for [`EncodeError`](bincode::error::EncodeError).
    BincodeEncode(bincode::error::EncodeError),

    /// The error variant for [`std::io::Error`].
    StdIo(std::io::Error),
}

impl RisparmioError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn insufficient_edges<L, S>(label: L, msg: S) -> Self
    where
        L: Into<String>,
        S: Into<String>,
    {
        Self::InsufficientEdges(InsufficientEdgesError {
            label: label.into(),
            msg: msg.into(),
        })
    }
}

impl fmt::Display for RisparmioError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::InvalidFormat(e) => e.fmt(f),
            Self::InsufficientEdges(e) => e.fmt(f),
            Self::ParseInt(e) => e.fmt(f),
            Self::BincodeDecode(e) => e.fmt(f),
            Self::BincodeEncode(e) => e.fmt(f),
            Self::StdIo(e) => e.fmt(f),
        }
    }
}

impl Error for RisparmioError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when an input text is ill-formed.
#[derive(Debug)]
pub struct InvalidFormatError {
    /// Name of the input.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// Error used when a vertex has too few incident edges to restore
/// connectivity.
#[derive(Debug)]
pub struct InsufficientEdgesError {
    /// Label of the vertex.
    pub(crate) label: String,

    /// Error message.
    pub(crate) msg: String,
}

impl InsufficientEdgesError {
    /// Gets the label of the vertex that could not be connected.
    #[inline(always)]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for InsufficientEdgesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InsufficientEdgesError: {}: {}", self.label, self.msg)
    }
}

impl Error for InsufficientEdgesError {}

impl From<std::num::ParseIntError> for RisparmioError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::ParseInt(error)
    }
}

impl From<bincode::error::DecodeError> for RisparmioError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::BincodeDecode(error)
    }
}

impl From<bincode::error::EncodeError> for RisparmioError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::BincodeEncode(error)
    }
}

impl From<std::io::Error> for RisparmioError {
    fn from(error: std::io::Error) -> Self {
        Self::StdIo(error)
    }
}
