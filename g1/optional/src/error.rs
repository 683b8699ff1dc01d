use std::error;

use snafu::prelude::*;

/// Error returned by the format adapters.
///
/// `E` is the error type of the underlying codec.  Codec errors are never rewritten; they are
/// carried as `source` of either `Syntax` or `Codec`.
#[derive(Debug, Snafu)]
pub enum Error<E>
where
    E: error::Error + 'static,
{
    //
    // Encoding errors, detected before the value reaches the codec.
    //
    #[snafu(display("unsupported type: {type_name}"))]
    UnsupportedType { type_name: &'static str },
    #[snafu(display("unsupported value: {value}"))]
    UnsupportedValue { value: String },

    //
    // Codec errors.
    //
    #[snafu(display("syntax error: {source}"))]
    Syntax { source: E },
    #[snafu(display("{source}"))]
    Codec { source: E },
}

impl<E> Error<E>
where
    E: error::Error + 'static,
{
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }

    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValue { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn codec_error(&self) -> Option<&E> {
        match self {
            Self::Syntax { source } | Self::Codec { source } => Some(source),
            Self::UnsupportedType { .. } | Self::UnsupportedValue { .. } => None,
        }
    }
}
