use crate::constant::{HELP_MESSAGE, HELP_NAME, HELP_SHORT};
use crate::convert::FromToken;
use crate::model::Flag;
use crate::parser::DeclarationInfo;

/// The description of one named command line option: identity, metadata, default value,
/// required-ness, and (after resolution) the resolved value.
///
/// A declaration is created via [`Declaration::new`] or [`Declaration::with_short`] and
/// configured through value-returning builder calls, each producing an updated snapshot.
/// The resolution step ([`resolve`](crate::resolve) or
/// [`CommandLineParser::parse`](crate::CommandLineParser::parse)) finalizes it.
///
/// ### Example
/// ```
/// use minarg::{resolve, Declaration};
///
/// let length = Declaration::<u8>::with_short('l', "length")
///     .description("The length of the run.")
///     .default(1);
///
/// assert_eq!(resolve(&["--length", "5"], &length).unwrap(), Some(5));
/// assert_eq!(resolve(&["-l", "5"], &length).unwrap(), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct Declaration<T> {
    name: String,
    short: Option<char>,
    description: Option<String>,
    default: Option<T>,
    required: bool,
    value: Option<T>,
}

impl<T> Declaration<T> {
    /// Create a declaration with only a long name.
    ///
    /// # Panics
    /// When `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "declaration name must be non-empty");

        Self {
            name,
            short: None,
            description: None,
            default: None,
            required: false,
            value: None,
        }
    }

    /// Create a declaration with both a short and a long name.
    ///
    /// # Panics
    /// When `name` is empty.
    pub fn with_short(short: char, name: impl Into<String>) -> Self {
        Self {
            short: Some(short),
            ..Self::new(name)
        }
    }

    /// Document the description for this declaration.
    /// If repeated, only the final description will apply.
    ///
    /// The text may contain embedded line breaks; the help renderer wraps each line
    /// independently.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Set the default value, returned when the option is absent from the command line.
    /// If repeated, only the final default will apply.
    pub fn default(mut self, value: T) -> Self {
        self.default.replace(value);
        self
    }

    /// Mark the option as required.
    ///
    /// A required option must be supplied on the command line; a default value does not
    /// bypass the check.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The long name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short name, when one was declared.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Whether the option is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The default value, when one was set.
    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// The resolved value, falling back to the default when the option was never
    /// supplied. `None` when neither is present.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref().or(self.default.as_ref())
    }

    pub(crate) fn resolved(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    pub(crate) fn info(&self, is_flag: bool) -> DeclarationInfo {
        DeclarationInfo::new(
            self.name.clone(),
            self.short,
            self.description.clone(),
            is_flag,
            self.required,
        )
    }
}

impl<T: FromToken> From<&Declaration<T>> for DeclarationInfo {
    fn from(declaration: &Declaration<T>) -> Self {
        declaration.info(!T::TAKES_VALUE)
    }
}

/// The preset `--help (-h)` declaration, defaulting to [`Flag::FALSE`].
///
/// Provided for convenience; a session never registers it implicitly.
///
/// ### Example
/// ```
/// use minarg::{help, CommandLineParser, Flag};
///
/// let mut parser = CommandLineParser::new(vec!["program".to_string()]);
/// let show_help = parser.parse(help()).unwrap();
/// assert_eq!(show_help.value(), Some(&Flag::FALSE));
/// ```
pub fn help() -> Declaration<Flag> {
    Declaration::with_short(HELP_SHORT, HELP_NAME)
        .description(HELP_MESSAGE)
        .default(Flag::FALSE)
}
