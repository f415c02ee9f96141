use std::env;

use crate::api::declaration::Declaration;
use crate::convert::{ConvertError, FromToken};
use crate::parser::{resolve, resolve_with, ConsoleInterface, UserInterface};
use crate::parser::{DeclarationInfo, ParseError, Printer};

/// The command line parsing session.
///
/// A session owns the raw argument tokens, captured once at startup, and accumulates a
/// summary of every declaration it resolves, in order. That record drives the help
/// listing: declarations appear in the listing in the order they were parsed.
///
/// ### Example
/// ```
/// use minarg::{help, CommandLineParser, Declaration, Flag};
///
/// let mut parser = CommandLineParser::new(vec![
///     "program".to_string(),
///     "--length".to_string(),
///     "5".to_string(),
/// ]);
///
/// let length = parser
///     .parse(Declaration::<u8>::with_short('l', "length").default(1))
///     .unwrap();
/// let show_help = parser.parse(help()).unwrap();
///
/// if show_help.value() == Some(&Flag::TRUE) {
///     parser.show_help();
/// }
/// assert_eq!(length.value(), Some(&5));
/// ```
pub struct CommandLineParser {
    tokens: Vec<String>,
    about: Option<String>,
    infos: Vec<DeclarationInfo>,
    user_interface: Box<dyn UserInterface>,
}

impl CommandLineParser {
    /// Capture the process arguments ([`env::args`]) for a parsing session.
    ///
    /// The first token is the program invocation path; it appears verbatim in the
    /// usage line of the help listing.
    pub fn from_env() -> Self {
        Self::new(env::args().collect())
    }

    /// Start a session over an explicit token list.
    pub fn new(tokens: Vec<String>) -> Self {
        Self::with_interface(tokens, Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(
        tokens: Vec<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            tokens,
            about: None,
            infos: Vec::default(),
            user_interface,
        }
    }

    /// Document the about message for this session, rendered under the usage line of
    /// the help listing. If repeated, only the final about message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Resolve `declaration` against the session tokens, recording it for the help
    /// listing, and return the updated snapshot carrying the resolved value.
    ///
    /// # Panics
    /// When a declaration with the same long name was already parsed in this session.
    pub fn parse<T>(&mut self, declaration: Declaration<T>) -> Result<Declaration<T>, ParseError>
    where
        T: Clone + FromToken,
    {
        self.record(DeclarationInfo::from(&declaration));
        let value = resolve(&self.tokens, &declaration)?;
        Ok(declaration.resolved(value))
    }

    /// Resolve `declaration` using a caller-supplied converter, for value types without
    /// a built-in [`FromToken`] coercion. The declaration is recorded as a value-taking
    /// (non-flag) option.
    ///
    /// # Panics
    /// When a declaration with the same long name was already parsed in this session.
    pub fn parse_with<T, F>(
        &mut self,
        declaration: Declaration<T>,
        converter: F,
    ) -> Result<Declaration<T>, ParseError>
    where
        T: Clone,
        F: Fn(&str) -> Result<T, ConvertError>,
    {
        self.record(declaration.info(false));
        let value = resolve_with(&self.tokens, &declaration, converter)?;
        Ok(declaration.resolved(value))
    }

    fn record(&mut self, info: DeclarationInfo) {
        assert!(
            !self
                .infos
                .iter()
                .any(|existing| existing.name() == info.name()),
            "cannot duplicate the parameter '{name}'",
            name = info.name(),
        );
        self.infos.push(info);
    }

    /// Render the help listing to `max_width` columns.
    ///
    /// The lines are the renderer's only product; writing them to a destination is the
    /// caller's concern (or use [`CommandLineParser::show_help`]).
    pub fn render_help(&self, max_width: usize) -> Vec<String> {
        self.printer().render(max_width)
    }

    /// Print the help listing, sized to the terminal width when detectable and 80
    /// columns otherwise.
    pub fn show_help(&self) {
        self.printer().print_help(&*self.user_interface);
    }

    /// Print the help listing at an explicit width.
    pub fn show_help_width(&self, max_width: usize) {
        self.printer()
            .print_help_width(max_width, &*self.user_interface);
    }

    fn printer(&self) -> Printer {
        Printer::terminal(self.program(), self.about.clone(), self.infos.clone())
    }

    fn program(&self) -> String {
        self.tokens.first().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::declaration::help;
    use crate::model::Flag;
    use crate::parser::interface::util::channel_interface;
    use crate::test::assert_contains;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse() {
        // Setup
        let mut parser = CommandLineParser::new(tokens(&["prog", "--length", "5", "-n"]));

        // Execute
        let length = parser
            .parse(Declaration::<u8>::with_short('l', "length").default(1))
            .unwrap();
        let no_description = parser
            .parse(Declaration::<Flag>::with_short('n', "no-description"))
            .unwrap();
        let message = parser
            .parse(Declaration::<String>::new("message").default("Hello, world!".to_string()))
            .unwrap();

        // Verify
        assert_eq!(length.value(), Some(&5));
        assert_eq!(no_description.value(), Some(&Flag::TRUE));
        assert_eq!(message.value(), Some(&"Hello, world!".to_string()));
    }

    #[test]
    fn parse_error_propagates() {
        // Setup
        let mut parser = CommandLineParser::new(tokens(&["prog", "--length"]));

        // Execute
        let error = parser
            .parse(Declaration::<u8>::new("length"))
            .unwrap_err();

        // Verify
        assert_eq!(error, ParseError::MissingValue("length".to_string()));
    }

    #[test]
    fn parse_with_converter() {
        // Setup
        #[derive(Debug, Clone, PartialEq)]
        struct Upper(String);

        let mut parser = CommandLineParser::new(tokens(&["prog", "--shout", "hey"]));

        // Execute
        let shout = parser
            .parse_with(Declaration::<Upper>::new("shout"), |token| {
                Ok(Upper(token.to_ascii_uppercase()))
            })
            .unwrap();

        // Verify
        assert_eq!(shout.value(), Some(&Upper("HEY".to_string())));
    }

    #[test]
    #[should_panic(expected = "cannot duplicate the parameter 'length'")]
    fn parse_duplicate() {
        let mut parser = CommandLineParser::new(tokens(&["prog"]));
        parser
            .parse(Declaration::<u8>::new("length").default(1))
            .unwrap();
        let _ = parser.parse(Declaration::<u8>::new("length").default(1));
    }

    #[test]
    fn render_help_in_parse_order() {
        // Setup
        let mut parser = CommandLineParser::new(tokens(&["prog"]));
        parser
            .parse(Declaration::<u8>::with_short('l', "length").default(1))
            .unwrap();
        parser
            .parse(Declaration::<Flag>::with_short('n', "no-description"))
            .unwrap();
        parser.parse(help()).unwrap();

        // Execute
        let lines = parser.render_help(80);

        // Verify
        assert_eq!(
            lines,
            vec![
                "Usage: prog [options]".to_string(),
                "Options:".to_string(),
                "--length (-l) <LENGTH>  ".to_string(),
                "--no-description (-n)   ".to_string(),
                "--help (-h)             Show help message.".to_string(),
            ]
        );
    }

    #[test]
    fn show_help_width() {
        // Setup
        let (sender, receiver) = channel_interface();
        let mut parser =
            CommandLineParser::with_interface(tokens(&["prog"]), Box::new(sender));
        parser = parser.about("A program that does things.");
        parser.parse(help()).unwrap();

        // Execute
        parser.show_help_width(80);
        drop(parser);

        // Verify
        let message = receiver.consume_message();
        assert_contains!(message, "Usage: prog [options]");
        assert_contains!(message, "A program that does things.");
        assert_contains!(message, "--help (-h)  Show help message.");
    }

    #[test]
    fn program_defaults_to_empty() {
        // Setup
        let parser = CommandLineParser::new(Vec::default());

        // Execute
        let lines = parser.render_help(80);

        // Verify
        assert_eq!(lines[0], "Usage:  [options]");
    }
}
