use super::chain::Chain;
use super::record::read_load_address;
use crate::error;
use crate::lang::{decode_into, Address, Dialect, Error, LineNumber, Machine};
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// What a finished conversion saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub dialect: Dialect,
    pub load_address: Address,
    pub lines: usize,
    pub first_line: Option<LineNumber>,
    pub last_line: Option<LineNumber>,
    /// Program bytes read after the load address.
    pub bytes: u64,
    /// CRC-32 (IEEE) of those bytes.
    pub crc32: u32,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} program at ${:04X}: {} lines",
            self.dialect, self.load_address, self.lines
        )?;
        if let (Some(first), Some(last)) = (self.first_line, self.last_line) {
            write!(f, " ({}-{})", first, last)?;
        }
        write!(f, ", {} bytes, crc32 {:08x}", self.bytes, self.crc32)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    dialect: Option<Dialect>,
    interrupted: Option<Arc<AtomicBool>>,
}

impl Converter {
    pub fn new() -> Converter {
        Converter::default()
    }

    /// Use this dialect instead of the machine's default.
    pub fn dialect(self, dialect: Option<Dialect>) -> Converter {
        Converter { dialect, ..self }
    }

    /// Abort between lines once the flag is set.
    pub fn with_interrupt(self, interrupted: Arc<AtomicBool>) -> Converter {
        Converter {
            interrupted: Some(interrupted),
            ..self
        }
    }

    /// The dialect a program loaded at `load_address` will be decoded as.
    pub fn select(&self, load_address: Address) -> Result<Dialect, Error> {
        Machine::for_load_address(load_address)?.select(self.dialect)
    }

    /// Convert a whole file image: load address, then the line chain.
    pub fn convert<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<Summary, Error> {
        let load_address = read_load_address(&mut input)?;
        self.convert_program(input, load_address, output)
    }

    /// Convert a line chain whose load address was read by the caller.
    pub fn convert_program<R: Read, W: Write>(
        &self,
        input: R,
        load_address: Address,
        mut output: W,
    ) -> Result<Summary, Error> {
        let machine = Machine::for_load_address(load_address)?;
        let dialect = machine.select(self.dialect)?;
        info!(
            "load address ${:04X} ({}), decoding as {}",
            load_address, machine.name, dialect
        );
        let table = dialect.table();
        let mut chain = Chain::new(input, load_address).starting_at(machine.chain_start)?;
        let mut summary = Summary {
            dialect,
            load_address,
            lines: 0,
            first_line: None,
            last_line: None,
            bytes: 0,
            crc32: 0,
        };
        let mut text = Vec::with_capacity(512);
        loop {
            self.check_interrupt()?;
            let record = match chain.next() {
                Some(record) => record?,
                None => break,
            };
            if !record.is_terminated() {
                warn!("line {} has no terminator", record.number);
            }
            text.clear();
            text.extend_from_slice(format!("{} ", record.number).as_bytes());
            decode_into(&record.body, table, &mut text)
                .map_err(|e| e.at_address(record.address).in_line_number(record.number))?;
            text.push(b'\n');
            output
                .write_all(&text)
                .map_err(|e| error!(OutputFailed; e.to_string()))?;
            summary.lines += 1;
            summary.first_line.get_or_insert(record.number);
            if let Some(last) = summary.last_line {
                if record.number <= last {
                    warn!("line {} follows line {}", record.number, last);
                }
            }
            summary.last_line = Some(record.number);
        }
        output
            .flush()
            .map_err(|e| error!(OutputFailed; e.to_string()))?;
        if chain.has_trailing_data()? {
            warn!("ignoring data after the end of the program");
        }
        summary.bytes = chain.bytes_read();
        summary.crc32 = chain.checksum();
        info!("{}", summary);
        Ok(summary)
    }

    fn check_interrupt(&self) -> Result<(), Error> {
        match &self.interrupted {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(error!(Interrupted)),
            _ => Ok(()),
        }
    }
}

/// Convert an in-memory file image with the default dialect.
pub fn convert_image<W: Write>(image: &[u8], output: W) -> Result<Summary, Error> {
    Converter::new().convert(image, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_print_hi() {
        let image = b"\x01\x08\x0b\x08\x0a\x00\x99\"HI\"\x00\x00\x00";
        let mut out: Vec<u8> = Vec::new();
        let summary = convert_image(image, &mut out).unwrap();
        assert_eq!(out, b"10 PRINT\"HI\"\n");
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.first_line, Some(10));
        assert_eq!(summary.bytes, 12);
    }

    #[test]
    fn test_descending_line_numbers() {
        let image = b"\x01\x08\x07\x08\x14\x00\x80\x00\x0d\x08\x0a\x00\x80\x00\x00\x00";
        let mut out: Vec<u8> = Vec::new();
        let summary = convert_image(image, &mut out).unwrap();
        assert_eq!(out, b"20 END\n10 END\n");
        assert_eq!(summary.first_line, Some(20));
        assert_eq!(summary.last_line, Some(10));
    }

    #[test]
    fn test_interrupted() {
        let image = b"\x01\x08\x0b\x08\x0a\x00\x99\"HI\"\x00\x00\x00";
        let flag = Arc::new(AtomicBool::new(true));
        let mut out: Vec<u8> = Vec::new();
        let e = Converter::new()
            .with_interrupt(flag)
            .convert(&image[..], &mut out)
            .unwrap_err();
        assert!(e.is(ErrorCode::Interrupted));
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_error_has_context() {
        let image = b"\x01\x08\x07\x08\x14\x00\xcc\x00\x00\x00";
        let e = convert_image(image, Vec::new()).unwrap_err();
        assert!(e.is(ErrorCode::UnknownToken));
        assert_eq!(e.line_number(), Some(20));
        assert_eq!(e.address(), Some(0x0801));
        assert_eq!(e.offset(), Some(0));
    }
}
