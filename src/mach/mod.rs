/*!
## Rust Machine Module

This Rust module reads a program image the way the Commodore ROM lays it
out in memory: a chain of line records, each pointing at the next, and
streams the decoded listing to any writer.

*/

mod chain;
mod convert;
mod record;

pub use chain::Chain;
pub use chain::MAX_RECORD_LEN;
pub use convert::convert_image;
pub use convert::Converter;
pub use convert::Summary;
pub use record::read_load_address;
pub use record::LineRecord;
pub use record::RecordReader;
