use thiserror::Error;

use crate::api::Declaration;
use crate::convert::{ConvertError, FromToken};
use crate::model::Flag;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Failure while resolving one declaration against the raw tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A non-flag switch matched, but no following token existed to take as its value.
    #[error("argument '{0}' requires a value.")]
    MissingValue(String),
    /// A required option was never supplied; a default value does not bypass the check.
    #[error("argument '{0}' is required.")]
    RequiredMissing(String),
    /// The captured raw token could not convert to the declared value type.
    #[error("failed to parse the argument '{name}': {source}")]
    Coercion {
        /// The declaration's long name.
        name: String,
        /// The underlying conversion failure.
        source: ConvertError,
    },
}

/// Resolve one declaration against the raw tokens.
///
/// Scans the tokens left to right for the declaration's switch, captures the raw value
/// (a later occurrence overwrites an earlier one), applies the required/default policy,
/// and converts the capture via [`FromToken`]. `Ok(None)` means the option was not
/// supplied and no default exists.
///
/// ### Example
/// ```
/// use minarg::{resolve, Declaration};
///
/// let declaration = Declaration::<u32>::new("count").default(3);
///
/// assert_eq!(resolve(&["--count", "7"], &declaration).unwrap(), Some(7));
///
/// let absent: &[&str] = &[];
/// assert_eq!(resolve(absent, &declaration).unwrap(), Some(3));
/// ```
pub fn resolve<T, S>(tokens: &[S], declaration: &Declaration<T>) -> Result<Option<T>, ParseError>
where
    T: Clone + FromToken,
    S: AsRef<str>,
{
    let captured = scan(
        tokens,
        declaration.name(),
        declaration.short(),
        T::TAKES_VALUE,
    )?;
    finish(captured, declaration, T::from_token)
}

/// Resolve one declaration using a caller-supplied converter, for value types without a
/// built-in [`FromToken`] coercion.
///
/// The declaration is always treated as value-taking: a matched switch consumes the
/// following token.
///
/// ### Example
/// ```
/// use minarg::{resolve_with, ConvertError, Declaration};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// let declaration = Declaration::<Level>::new("level").default(Level::Low);
/// let level = resolve_with(&["--level", "high"], &declaration, |token| match token {
///     "low" => Ok(Level::Low),
///     "high" => Ok(Level::High),
///     _ => Err(ConvertError::Custom(format!("no such level '{token}'."))),
/// });
///
/// assert_eq!(level.unwrap(), Some(Level::High));
/// ```
pub fn resolve_with<T, S, F>(
    tokens: &[S],
    declaration: &Declaration<T>,
    converter: F,
) -> Result<Option<T>, ParseError>
where
    T: Clone,
    S: AsRef<str>,
    F: Fn(&str) -> Result<T, ConvertError>,
{
    let captured = scan(tokens, declaration.name(), declaration.short(), true)?;
    finish(captured, declaration, converter)
}

// Match policy by candidate length: 0-1 never matches; exactly 2 is reserved for the
// short form; anything longer must equal the full `--<name>` spelling. A one-character
// long name therefore cannot collide with a short name.
fn is_match(candidate: &str, name: &str, short: Option<char>) -> bool {
    match candidate.len() {
        0 | 1 => false,
        2 => match short {
            Some(short) => candidate == format!("-{short}"),
            None => false,
        },
        _ => candidate == format!("--{name}"),
    }
}

fn scan<S: AsRef<str>>(
    tokens: &[S],
    name: &str,
    short: Option<char>,
    takes_value: bool,
) -> Result<Option<String>, ParseError> {
    let mut captured: Option<String> = None;
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index].as_ref();

        if token.starts_with('-') && is_match(token, name, short) {
            if !takes_value {
                // Presence is the value; never consume the following token.
                captured.replace(Flag::TRUE.to_string());
            } else if index + 1 < tokens.len() {
                index += 1;
                captured.replace(tokens[index].as_ref().to_string());
            } else {
                return Err(ParseError::MissingValue(name.to_string()));
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' matched '{name}'.");
            }
        }

        index += 1;
    }

    Ok(captured)
}

fn finish<T, F>(
    captured: Option<String>,
    declaration: &Declaration<T>,
    converter: F,
) -> Result<Option<T>, ParseError>
where
    T: Clone,
    F: Fn(&str) -> Result<T, ConvertError>,
{
    match captured {
        None => {
            if declaration.is_required() {
                return Err(ParseError::RequiredMissing(declaration.name().to_string()));
            }

            Ok(declaration.default_value().cloned())
        }
        Some(raw) => converter(&raw)
            .map(Some)
            .map_err(|source| ParseError::Coercion {
                name: declaration.name().to_string(),
                source,
            }),
    }
}
