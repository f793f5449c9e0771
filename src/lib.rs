//! # BASIC Text
//!
//! Turn the tokenized BASIC programs saved by Commodore 8-bit machines
//! back into readable listings.
//!
//! A program file starts with the two-byte address the machine loads it
//! at. That address says which machine, and so which BASIC dialect,
//! wrote the file. After it comes a chain of lines, each one holding the
//! address of the next line, its line number, and the statement text with
//! every keyword squeezed into a one or two byte token.
//!
//! ```
//! let prg = b"\x01\x08\x0b\x08\x0a\x00\x99\"HI\"\x00\x00\x00";
//! let mut listing: Vec<u8> = Vec::new();
//! bastext::mach::convert_image(prg, &mut listing).unwrap();
//! assert_eq!(listing, b"10 PRINT\"HI\"\n");
//! ```
//!
//! From a terminal, `bastext GAME.PRG GAME.BAS` writes the listing to a
//! file, `bastext GAME.PRG` prints it, and `bastext` alone asks for both
//! file names. `bastext --dialects` shows every load address it knows.

pub mod lang;
pub mod mach;
pub mod term;
