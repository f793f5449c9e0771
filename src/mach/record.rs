use crate::error;
use crate::lang::{Address, Error, LineNumber};
use crc::{crc32, Hasher32};
use std::io::{ErrorKind, Read};

/// Pointer, line number and terminator.
pub const MIN_RECORD_LEN: u16 = 5;

/// One node of the line chain.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Where this record sits in load-address space.
    pub address: Address,
    pub next: Address,
    pub number: LineNumber,
    /// Tokenized statement bytes, including the null terminator.
    pub body: Vec<u8>,
}

impl LineRecord {
    pub fn is_terminated(&self) -> bool {
        self.body.contains(&0)
    }
}

/// Read the two-byte load address that precedes the program image.
pub fn read_load_address<R: Read>(reader: &mut R) -> Result<Address, Error> {
    let mut buf = [0u8; 2];
    let len = fill(reader, &mut buf)?;
    if len < buf.len() {
        return Err(error!(UnexpectedData; "file too short for a load address"));
    }
    Ok(u16::from_le_bytes(buf))
}

/// Reads chain fields and payloads as separate operations so header
/// fields never share a cursor with line contents. Everything read is
/// counted and checksummed.
pub struct RecordReader<R> {
    inner: R,
    consumed: u64,
    digest: crc32::Digest,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> RecordReader<R> {
        RecordReader {
            inner,
            consumed: 0,
            digest: crc32::Digest::new(crc32::IEEE),
        }
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn checksum(&self) -> u32 {
        self.digest.sum32()
    }

    /// A next-line pointer, or `None` if the stream ran out first.
    pub fn read_link(&mut self) -> Result<Option<Address>, Error> {
        let mut buf = [0u8; 2];
        if self.read_bytes(&mut buf)? < buf.len() {
            return Ok(None);
        }
        Ok(Some(u16::from_le_bytes(buf)))
    }

    /// Line number plus body. A short read is reported distinctly from
    /// the end of the stream.
    pub fn read_payload(&mut self, address: Address, next: Address) -> Result<LineRecord, Error> {
        let len = match next.checked_sub(address) {
            Some(len) if len >= MIN_RECORD_LEN => (len - 2) as usize,
            _ => {
                return Err(error!(InvalidProgramStructure, @address;
                    format!("next line at ${:04X} leaves no room for this one", next)))
            }
        };
        let mut buf = vec![0u8; len];
        let got = self.read_bytes(&mut buf)?;
        if got < len {
            return Err(error!(IoShortRead, @address;
                format!("expected {} bytes, found {}", len, got)));
        }
        let body = buf.split_off(2);
        Ok(LineRecord {
            address,
            next,
            number: u16::from_le_bytes([buf[0], buf[1]]),
            body,
        })
    }

    /// Discard `len` bytes, returning how many were actually there.
    pub fn skip(&mut self, len: usize) -> Result<usize, Error> {
        let mut buf = [0u8; 256];
        let mut skipped = 0;
        while skipped < len {
            let want = std::cmp::min(buf.len(), len - skipped);
            let got = self.read_bytes(&mut buf[..want])?;
            skipped += got;
            if got < want {
                break;
            }
        }
        Ok(skipped)
    }

    /// Whether anything follows what has been read so far. Probed bytes
    /// are not counted.
    pub fn has_more(&mut self) -> Result<bool, Error> {
        let mut probe = [0u8; 1];
        Ok(fill(&mut self.inner, &mut probe)? > 0)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let len = fill(&mut self.inner, buf)?;
        self.consumed += len as u64;
        self.digest.write(&buf[..len]);
        Ok(len)
    }
}

// Like read_exact, but a short stream is not an error.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, Error> {
    let mut len = 0;
    while len < buf.len() {
        match reader.read(&mut buf[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(error!(UnableToOpenInput; e.to_string())),
        }
    }
    Ok(len)
}
