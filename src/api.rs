mod core;
mod declaration;

pub use self::core::CommandLineParser;
pub use self::declaration::{help, Declaration};
