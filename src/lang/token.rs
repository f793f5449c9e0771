/// The REM token is the same in every Commodore dialect.
pub const REM: u8 = 0x8F;

/// Single-byte codes start here; anything lower is plain text.
pub const FIRST_TOKEN: u8 = 0x80;

/// Result of looking up the first byte of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    Keyword(&'static str),
    NeedsSecondByte,
    Unmapped,
}

/// A token code: one byte, or a prefix byte followed by a secondary byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Code {
    Single(u8),
    Extended(u8, u8),
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Code::Single(b) => write!(f, "${:02X}", b),
            Code::Extended(p, b) => write!(f, "${:02X} ${:02X}", p, b),
        }
    }
}

/// A second-level table reached through a prefix byte.
#[derive(Debug)]
pub struct Extension {
    pub prefix: u8,
    pub first: u8,
    pub keywords: &'static [&'static str],
}

impl Extension {
    fn get(&self, secondary: u8) -> Option<&'static str> {
        let index = secondary.checked_sub(self.first)? as usize;
        match self.keywords.get(index) {
            Some(&"") | None => None,
            Some(keyword) => Some(*keyword),
        }
    }
}

/// Keyword tables are built as a list of ranges so a dialect can share the
/// common BASIC 2.0 block and add its own codes on top. An empty keyword
/// marks a code the dialect leaves unused.
#[derive(Debug)]
pub struct TokenTable {
    pub name: &'static str,
    pub ranges: &'static [(u8, &'static [&'static str])],
    pub extensions: &'static [Extension],
}

impl TokenTable {
    pub fn lookup(&self, code: u8) -> Lookup {
        if code < FIRST_TOKEN {
            return Lookup::Unmapped;
        }
        if self.extensions.iter().any(|e| e.prefix == code) {
            return Lookup::NeedsSecondByte;
        }
        for (first, keywords) in self.ranges.iter() {
            if code < *first {
                continue;
            }
            match keywords.get((code - first) as usize) {
                Some(&"") => return Lookup::Unmapped,
                Some(keyword) => return Lookup::Keyword(*keyword),
                None => continue,
            }
        }
        Lookup::Unmapped
    }

    pub fn lookup_extended(&self, prefix: u8, secondary: u8) -> Option<&'static str> {
        self.extensions
            .iter()
            .find(|e| e.prefix == prefix)
            .and_then(|e| e.get(secondary))
    }

    pub fn is_prefix(&self, code: u8) -> bool {
        self.lookup(code) == Lookup::NeedsSecondByte
    }

    /// Every mapped code with its keyword, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Code, &'static str)> + '_ {
        let singles = self.ranges.iter().flat_map(move |(first, keywords)| {
            keywords
                .iter()
                .enumerate()
                .filter(|(_, k)| !k.is_empty())
                .map(move |(i, k)| (*first as usize + i, *k))
                .filter(move |(code, _)| code_is_single(self, *code))
                .map(|(code, k)| (Code::Single(code as u8), k))
        });
        let extended = self.extensions.iter().flat_map(|e| {
            e.keywords
                .iter()
                .enumerate()
                .filter(|(_, k)| !k.is_empty())
                .map(move |(i, k)| (Code::Extended(e.prefix, e.first + i as u8), *k))
        });
        singles.chain(extended)
    }
}

// Prefix bytes shadow whatever a shared range says about them.
fn code_is_single(table: &TokenTable, code: usize) -> bool {
    code <= u8::MAX as usize && !table.extensions.iter().any(|e| e.prefix as usize == code)
}
