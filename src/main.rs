//! # bastext
//!
//! Convert a tokenized Commodore BASIC program into a text listing.
//!

fn main() {
    bastext::term::main();
}
