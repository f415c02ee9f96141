pub(crate) mod interface;
mod printer;
mod resolver;

pub(crate) use interface::{ConsoleInterface, UserInterface};
pub use printer::DeclarationInfo;
pub(crate) use printer::Printer;
pub use resolver::{resolve, resolve_with, ParseError};
