/*!
# Rust Language Module

This Rust module knows the Commodore BASIC dialects: which machine loads
programs where, the keyword for every token, and how a tokenized line
expands back into text.

*/

/// An address in the 6502 load-address space of the program.
pub type Address = u16;
pub type LineNumber = u16;

#[macro_use]
mod error;
mod detok;
mod dialect;
mod tables;
mod token;

pub use detok::decode;
pub use detok::decode_into;
pub use dialect::Dialect;
pub use dialect::Machine;
pub use error::Error;
pub use error::ErrorCode;
pub use token::Code;
pub use token::Extension;
pub use token::Lookup;
pub use token::TokenTable;
pub use token::REM;

#[cfg(test)]
mod tests;
