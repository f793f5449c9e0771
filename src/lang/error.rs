use super::{Address, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    address: Option<Address>,
    line_number: Option<LineNumber>,
    offset: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$offset:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_offset($offset)
    };
    ($err:ident, @$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$offset:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_offset($offset)
            .message($msg)
    };
    ($err:ident, @$addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            line_number: None,
            offset: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn at_address(self, address: Address) -> Error {
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn at_offset(self, offset: usize) -> Error {
        debug_assert!(self.offset.is_none());
        Error {
            offset: Some(offset),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

/// Numeric codes double as the process exit status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    IoShortRead = 2,
    OutputFailed = 3,
    UnexpectedData = 4,
    UnableToOpenInput = 5,
    UnableToOpenOutput = 6,
    FilenameEntry = 7,
    InvalidProgramStructure = 8,
    UnrecognizedLoadAddress = 9,
    TruncatedToken = 11,
    UnknownToken = 12,
    Interrupted = 13,
    UnsupportedDialect = 14,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SHORT READ",
            3 => "OUTPUT FAILED",
            4 => "UNEXPECTED FILE DATA",
            5 => "UNABLE TO OPEN INPUT FILE",
            6 => "UNABLE TO OPEN OUTPUT FILE",
            7 => "FILENAME ENTRY ISSUE",
            8 => "INVALID PROGRAM STRUCTURE",
            9 => "UNRECOGNIZED LOAD ADDRESS",
            11 => "TRUNCATED TOKEN",
            12 => "UNKNOWN TOKEN",
            13 => "INTERRUPTED",
            14 => "UNSUPPORTED DIALECT",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT ${:04X}", address));
        }
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if let Some(offset) = self.offset {
            suffix.push_str(&format!(" (OFFSET {})", offset));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let e = error!(UnknownToken, ..3; "$CE $0B")
            .at_address(0x1C12)
            .in_line_number(20);
        assert_eq!(
            e.to_string(),
            "UNKNOWN TOKEN AT $1C12 IN 20 (OFFSET 3); $CE $0B"
        );
        assert!(e.is(ErrorCode::UnknownToken));
        assert_eq!(e.code(), 12);
    }

    #[test]
    fn test_display_bare() {
        assert_eq!(error!(Interrupted).to_string(), "INTERRUPTED");
        assert_eq!(
            error!(UnrecognizedLoadAddress, @0x9999).to_string(),
            "UNRECOGNIZED LOAD ADDRESS AT $9999"
        );
    }
}
