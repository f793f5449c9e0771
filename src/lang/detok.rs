use super::token::{Lookup, TokenTable, REM};
use super::Error;

const QUOTE: u8 = b'"';

/// Expand one tokenized line body into text.
pub fn decode(body: &[u8], table: &TokenTable) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(body.len() * 2);
    decode_into(body, table, &mut out)?;
    Ok(out)
}

/// Same as [`decode`] but appends to a buffer the caller reuses.
pub fn decode_into(body: &[u8], table: &TokenTable, out: &mut Vec<u8>) -> Result<(), Error> {
    Detokenizer::new(body, table).run(out)
}

struct Detokenizer<'a> {
    body: &'a [u8],
    table: &'a TokenTable,
    pos: usize,
    quoted: bool,
    remark: bool,
}

impl<'a> Detokenizer<'a> {
    fn new(body: &'a [u8], table: &'a TokenTable) -> Detokenizer<'a> {
        // The null terminator ends the line, whatever follows it.
        let end = body.iter().position(|&b| b == 0).unwrap_or(body.len());
        Detokenizer {
            body: &body[..end],
            table,
            pos: 0,
            quoted: false,
            remark: false,
        }
    }

    fn is_literal(&self) -> bool {
        self.quoted || self.remark
    }

    fn run(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        while let Some(&byte) = self.body.get(self.pos) {
            if byte == QUOTE && !self.remark {
                self.quoted = !self.quoted;
                out.push(byte);
                self.pos += 1;
            } else if byte < 0x80 || self.is_literal() {
                out.push(byte);
                self.pos += 1;
            } else {
                let keyword = self.token(byte)?;
                out.extend_from_slice(keyword.as_bytes());
                if byte == REM {
                    self.remark = true;
                }
            }
        }
        Ok(())
    }

    fn token(&mut self, byte: u8) -> Result<&'static str, Error> {
        let offset = self.pos;
        match self.table.lookup(byte) {
            Lookup::Keyword(keyword) => {
                self.pos += 1;
                Ok(keyword)
            }
            Lookup::NeedsSecondByte => {
                let secondary = match self.body.get(offset + 1) {
                    Some(&b) => b,
                    None => {
                        return Err(error!(TruncatedToken, ..offset;
                            format!("${:02X} at end of line", byte)))
                    }
                };
                match self.table.lookup_extended(byte, secondary) {
                    Some(keyword) => {
                        self.pos += 2;
                        Ok(keyword)
                    }
                    None => Err(error!(UnknownToken, ..offset;
                        format!("${:02X} ${:02X} in {}", byte, secondary, self.table.name))),
                }
            }
            Lookup::Unmapped => Err(error!(UnknownToken, ..offset;
                format!("${:02X} in {}", byte, self.table.name))),
        }
    }
}
