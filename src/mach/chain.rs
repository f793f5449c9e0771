use super::record::{LineRecord, RecordReader, MIN_RECORD_LEN};
use crate::error;
use crate::lang::{Address, Error};
use std::io::Read;
use tracing::{debug, info};

/// Lines are limited to 256 bytes, pointers and line number included.
pub const MAX_RECORD_LEN: u16 = 256;

#[derive(Debug, Clone, PartialEq)]
enum State {
    Start,
    ReadingHeader,
    /// `None` when the stream ended where a pointer should be.
    ReadingLine(Option<Address>),
    Done,
    Failed(Error),
}

/// Walks the linked list of line records.
///
/// The load address has already been consumed by the caller. Each item is
/// one validated record; the first error ends the walk.
pub struct Chain<R> {
    reader: RecordReader<R>,
    load_address: Address,
    chain_start: Address,
    cursor: Address,
    state: State,
}

impl<R: Read> Chain<R> {
    pub fn new(reader: R, load_address: Address) -> Chain<R> {
        Chain {
            reader: RecordReader::new(reader),
            load_address,
            chain_start: load_address,
            cursor: load_address,
            state: State::Start,
        }
    }

    /// Begin the chain past a machine-code block that follows the load
    /// address.
    pub fn starting_at(self, chain_start: Address) -> Result<Chain<R>, Error> {
        if self.state != State::Start || chain_start < self.load_address {
            return Err(error!(UnrecognizedLoadAddress, @self.load_address;
                format!("chain cannot start at ${:04X}", chain_start)));
        }
        Ok(Chain {
            chain_start,
            cursor: chain_start,
            ..self
        })
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// The error that ended the walk, if one did.
    pub fn failure(&self) -> Option<&Error> {
        match &self.state {
            State::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.reader.consumed()
    }

    pub fn checksum(&self) -> u32 {
        self.reader.checksum()
    }

    /// Whether bytes follow the end-of-program marker.
    pub fn has_trailing_data(&mut self) -> Result<bool, Error> {
        if self.state != State::Done {
            return Ok(false);
        }
        self.reader.has_more()
    }

    fn fail(&mut self, error: Error) -> Option<Result<LineRecord, Error>> {
        self.state = State::Failed(error.clone());
        Some(Err(error))
    }

    fn skip_header(&mut self) -> Result<(), Error> {
        let len = (self.chain_start - self.load_address) as usize;
        if len == 0 {
            return Ok(());
        }
        info!(
            "skipping {} byte header from ${:04X} to ${:04X}",
            len, self.load_address, self.chain_start
        );
        let skipped = self.reader.skip(len)?;
        if skipped < len {
            return Err(error!(UnexpectedData, @self.load_address;
                format!("header ends after {} of {} bytes", skipped, len)));
        }
        Ok(())
    }

    fn first_link(&mut self) -> Result<Option<Address>, Error> {
        match self.reader.read_link()? {
            None => Err(error!(UnexpectedData, @self.cursor; "no line pointer")),
            Some(1) => Err(error!(UnexpectedData, @self.cursor; "line pointer is 1")),
            Some(0) => Ok(None),
            Some(next) => Ok(Some(next)),
        }
    }

    fn check_link(&self, next: Option<Address>) -> Result<Address, Error> {
        let next = match next {
            Some(next) => next,
            None => {
                return Err(error!(InvalidProgramStructure, @self.cursor;
                    "program ends without a terminator"))
            }
        };
        if next <= self.cursor {
            return Err(error!(InvalidProgramStructure, @self.cursor;
                format!("next line at ${:04X} is not above this one", next)));
        }
        let len = next - self.cursor;
        if len >= MAX_RECORD_LEN {
            return Err(error!(InvalidProgramStructure, @self.cursor;
                format!("line is {} bytes long", len)));
        }
        if len < MIN_RECORD_LEN {
            return Err(error!(InvalidProgramStructure, @self.cursor;
                format!("line is only {} bytes long", len)));
        }
        Ok(next)
    }

    fn read_record(&mut self, next: Address) -> Result<LineRecord, Error> {
        let record = self.reader.read_payload(self.cursor, next)?;
        debug!(
            "line {} at ${:04X}, {} bytes",
            record.number,
            record.address,
            next - record.address
        );
        self.cursor = next;
        Ok(record)
    }
}

impl<R: Read> Iterator for Chain<R> {
    type Item = Result<LineRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Start => {
                    if let Err(error) = self.skip_header() {
                        return self.fail(error);
                    }
                    self.state = State::ReadingHeader;
                }
                State::ReadingHeader => match self.first_link() {
                    Ok(None) => self.state = State::Done,
                    Ok(next) => self.state = State::ReadingLine(next),
                    Err(error) => return self.fail(error),
                },
                State::ReadingLine(Some(0)) => self.state = State::Done,
                State::ReadingLine(next) => {
                    let next = match self.check_link(next) {
                        Ok(next) => next,
                        Err(error) => return self.fail(error),
                    };
                    let record = match self.read_record(next) {
                        Ok(record) => record,
                        Err(error) => return self.fail(error),
                    };
                    match self.reader.read_link() {
                        Ok(link) => self.state = State::ReadingLine(link),
                        Err(error) => return self.fail(error),
                    }
                    return Some(Ok(record));
                }
                State::Done | State::Failed(_) => return None,
            }
        }
    }
}
