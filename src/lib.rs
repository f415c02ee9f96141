//! A lightweight, declaration-at-a-time command line argument parser.
//!
//! Declare each option as a [`Declaration`], resolve it against the process arguments,
//! and read the typed value. Declarations resolved through a [`CommandLineParser`]
//! session are additionally recorded for an on-demand, width-aware help listing.
//!
//! ```
//! use minarg::{help, CommandLineParser, Declaration, Flag};
//!
//! let mut parser = CommandLineParser::new(vec![
//!     "demo".to_string(),
//!     "--length".to_string(),
//!     "5".to_string(),
//! ]);
//!
//! let length = parser
//!     .parse(Declaration::<u8>::with_short('l', "length").default(1))
//!     .unwrap();
//! let show_help = parser.parse(help()).unwrap();
//!
//! if show_help.value() == Some(&Flag::TRUE) {
//!     parser.show_help();
//! }
//! assert_eq!(length.value(), Some(&5));
//! ```
//!
//! For tools too small to want a session, [`resolve`] works on a declaration at a time
//! with no shared state.
#![deny(missing_docs)]
mod api;
mod constant;
mod convert;
mod model;
mod parser;

pub use api::*;
pub use convert::{ConvertError, FromToken};
pub use model::Flag;
pub use parser::{resolve, resolve_with, DeclarationInfo, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
