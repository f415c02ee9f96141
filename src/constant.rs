pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show help message.";

// Help width used when the terminal width cannot be detected.
pub(crate) const DEFAULT_HELP_WIDTH: usize = 80;
