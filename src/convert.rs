use thiserror::Error;

use crate::model::Flag;

/// Failure to convert a raw command line token into a typed value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The token does not parse as the target type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidToken {
        /// The offending raw token.
        token: String,
        /// The target type name.
        type_name: &'static str,
    },
    /// The token is neither a boolean literal nor an integer.
    #[error("value must be either \"true\" (1) or \"false\" (0).")]
    InvalidBoolean,
    /// A caller-supplied converter failed with its own message.
    #[error("{0}")]
    Custom(String),
}

/// Behaviour to convert a raw command line token into the declared value type.
///
/// Implemented for the built-in value types: the fixed-width integers, `f32`/`f64`,
/// `String`, `bool`, and [`Flag`]. A declaration over any other type must supply its
/// own converter via [`resolve_with`](crate::resolve_with) or
/// [`CommandLineParser::parse_with`](crate::CommandLineParser::parse_with); there is no
/// runtime fallback for unsupported types.
pub trait FromToken: Sized {
    /// Whether a matched switch consumes the following token as its value.
    ///
    /// [`Flag`] is the one type that does not: presence of the switch is the value.
    const TAKES_VALUE: bool = true;

    /// Convert a raw token.
    fn from_token(token: &str) -> Result<Self, ConvertError>;
}

macro_rules! from_token_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromToken for $t {
                fn from_token(token: &str) -> Result<Self, ConvertError> {
                    token.parse::<$t>().map_err(|_| ConvertError::InvalidToken {
                        token: token.to_string(),
                        type_name: std::any::type_name::<$t>(),
                    })
                }
            }
        )*
    };
}

from_token_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl FromToken for String {
    fn from_token(token: &str) -> Result<Self, ConvertError> {
        Ok(token.to_string())
    }
}

impl FromToken for bool {
    fn from_token(token: &str) -> Result<Self, ConvertError> {
        match token {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => match token.parse::<i64>() {
                Ok(integer) => Ok(integer != 0),
                Err(_) => Err(ConvertError::InvalidBoolean),
            },
        }
    }
}

impl FromToken for Flag {
    const TAKES_VALUE: bool = false;

    // The matching switch is the signal; the token carries no information.
    fn from_token(_token: &str) -> Result<Self, ConvertError> {
        Ok(Flag::TRUE)
    }
}
