#![allow(dead_code)]
use bastext::lang::Error;
use bastext::mach::{convert_image, Converter, Summary};

/// Lays out a program image the way the ROM stores it.
pub struct Program {
    cursor: u16,
    bytes: Vec<u8>,
}

impl Program {
    pub fn new(load_address: u16) -> Program {
        Program {
            cursor: load_address,
            bytes: load_address.to_le_bytes().to_vec(),
        }
    }

    /// Bytes between the load address and the first line.
    pub fn padding(mut self, len: u16) -> Program {
        self.bytes.extend(std::iter::repeat(0xEA).take(len as usize));
        self.cursor += len;
        self
    }

    /// A well-formed line; the terminator is added here.
    pub fn line(mut self, number: u16, body: &[u8]) -> Program {
        let next = self.cursor + 5 + body.len() as u16;
        self.bytes.extend_from_slice(&next.to_le_bytes());
        self.bytes.extend_from_slice(&number.to_le_bytes());
        self.bytes.extend_from_slice(body);
        self.bytes.push(0);
        self.cursor = next;
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Program {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    pub fn end(self) -> Vec<u8> {
        self.raw(&[0, 0]).bytes
    }

    pub fn unterminated(self) -> Vec<u8> {
        self.bytes
    }
}

pub fn listing(image: &[u8]) -> Result<String, Error> {
    let mut out: Vec<u8> = Vec::new();
    convert_image(image, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Whatever was written before the conversion stopped, and how it stopped.
pub fn partial(converter: &Converter, image: &[u8]) -> (Vec<u8>, Result<Summary, Error>) {
    let mut out: Vec<u8> = Vec::new();
    let result = converter.convert(image, &mut out);
    (out, result)
}
