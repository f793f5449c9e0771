use super::tables;
use super::{Address, Error, TokenTable};

// Graphics 52 is left out until a keyword table for it is at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Basic2,
    Basic4,
    VicSuper,
    Basic35,
    Basic7,
    Basic71,
    FinalCartridge3,
}

impl Dialect {
    pub fn all() -> &'static [Dialect] {
        use Dialect::*;
        &[
            Basic2,
            Basic4,
            VicSuper,
            Basic35,
            Basic7,
            Basic71,
            FinalCartridge3,
        ]
    }

    /// The default dialect for programs saved from `load_address`.
    pub fn for_load_address(load_address: Address) -> Result<Dialect, Error> {
        Machine::for_load_address(load_address).map(|m| m.dialects[0])
    }

    pub fn table(self) -> &'static TokenTable {
        use Dialect::*;
        match self {
            Basic2 => &tables::BASIC_2,
            Basic4 => &tables::BASIC_4,
            VicSuper => &tables::SUPER_EXPANDER,
            Basic35 => &tables::BASIC_35,
            Basic7 => &tables::BASIC_7,
            Basic71 => &tables::BASIC_71,
            FinalCartridge3 => &tables::FINAL_CARTRIDGE_3,
        }
    }

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        use Dialect::*;
        match self {
            Basic2 => "2.0",
            Basic4 => "4.0",
            VicSuper => "vic",
            Basic35 => "3.5",
            Basic7 => "7.0",
            Basic71 => "7.1",
            FinalCartridge3 => "tfc3",
        }
    }

    pub fn from_name(s: &str) -> Option<Dialect> {
        let s = s.trim().to_ascii_lowercase();
        let s = s.trim_start_matches("basic").trim();
        Dialect::all().iter().copied().find(|d| match d {
            Dialect::Basic2 => s == "2.0" || s == "2",
            Dialect::Basic4 => s == "4.0" || s == "4",
            Dialect::Basic7 => s == "7.0" || s == "7",
            Dialect::VicSuper => s == "vic" || s == "super",
            d => s == d.name(),
        })
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.table().name)
    }
}

/// One row of the closed load-address table.
#[derive(Debug, PartialEq)]
pub struct Machine {
    pub load_address: Address,
    pub name: &'static str,
    /// Dialects whose programs load here, default first.
    pub dialects: &'static [Dialect],
    /// Where the first line record sits. Only differs from the load
    /// address when a machine-code block precedes the BASIC text.
    pub chain_start: Address,
}

static MACHINES: [Machine; 7] = [
    Machine {
        load_address: 0x0401,
        name: "PET/CBM, VIC-20 +3K",
        dialects: &[Dialect::Basic4, Dialect::Basic2, Dialect::VicSuper],
        chain_start: 0x0401,
    },
    Machine {
        load_address: 0x0801,
        name: "C64",
        dialects: &[Dialect::Basic2, Dialect::FinalCartridge3],
        chain_start: 0x0801,
    },
    Machine {
        load_address: 0x1001,
        name: "C16, Plus/4, VIC-20",
        dialects: &[Dialect::Basic35, Dialect::Basic2, Dialect::VicSuper],
        chain_start: 0x1001,
    },
    Machine {
        load_address: 0x1201,
        name: "VIC-20 +8K",
        dialects: &[Dialect::Basic2, Dialect::VicSuper],
        chain_start: 0x1201,
    },
    Machine {
        load_address: 0x1C01,
        name: "C128",
        dialects: &[Dialect::Basic7, Dialect::Basic71],
        chain_start: 0x1C01,
    },
    Machine {
        load_address: 0x4001,
        name: "C128, graphics allocated",
        dialects: &[Dialect::Basic7, Dialect::Basic71],
        chain_start: 0x4001,
    },
    Machine {
        load_address: 0x132D,
        name: "C128, BASIC 7.1 extension",
        dialects: &[Dialect::Basic71],
        chain_start: 0x1C01,
    },
];

impl Machine {
    pub fn all() -> &'static [Machine] {
        &MACHINES
    }

    pub fn for_load_address(load_address: Address) -> Result<&'static Machine, Error> {
        MACHINES
            .iter()
            .find(|m| m.load_address == load_address)
            .ok_or_else(|| error!(UnrecognizedLoadAddress, @load_address))
    }

    /// Pick the default dialect, or check an operator's choice against
    /// the dialects this machine could have saved.
    pub fn select(&self, choice: Option<Dialect>) -> Result<Dialect, Error> {
        match choice {
            None => Ok(self.dialects[0]),
            Some(dialect) if self.dialects.contains(&dialect) => Ok(dialect),
            Some(dialect) => Err(error!(UnsupportedDialect, @self.load_address;
                format!("{} programs do not load here", dialect))),
        }
    }

    /// Bytes of machine code between the load address and the first line.
    pub fn header_len(&self) -> u16 {
        self.chain_start - self.load_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_c64() {
        assert_eq!(Dialect::for_load_address(0x0801), Ok(Dialect::Basic2));
        assert_eq!(Dialect::for_load_address(0x1C01), Ok(Dialect::Basic7));
        assert_eq!(Dialect::for_load_address(0x132D), Ok(Dialect::Basic71));
    }

    #[test]
    fn test_unrecognized() {
        let e = Dialect::for_load_address(0x9999).unwrap_err();
        assert!(e.is(ErrorCode::UnrecognizedLoadAddress));
        assert_eq!(e.address(), Some(0x9999));
    }

    #[test]
    fn test_select() {
        let m = Machine::for_load_address(0x0801).unwrap();
        assert_eq!(m.select(None), Ok(Dialect::Basic2));
        assert_eq!(m.select(Some(Dialect::FinalCartridge3)), Ok(Dialect::FinalCartridge3));
        let e = m.select(Some(Dialect::Basic7)).unwrap_err();
        assert!(e.is(ErrorCode::UnsupportedDialect));
    }

    #[test]
    fn test_header_len() {
        assert_eq!(Machine::for_load_address(0x132D).unwrap().header_len(), 0x08D4);
        assert_eq!(Machine::for_load_address(0x0401).unwrap().header_len(), 0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Dialect::from_name("7.1"), Some(Dialect::Basic71));
        assert_eq!(Dialect::from_name("BASIC 2.0"), Some(Dialect::Basic2));
        assert_eq!(Dialect::from_name("Super"), Some(Dialect::VicSuper));
        assert_eq!(Dialect::from_name("tfc3"), Some(Dialect::FinalCartridge3));
        assert_eq!(Dialect::from_name("8.0"), None);
        for d in Dialect::all() {
            assert_eq!(Dialect::from_name(d.name()), Some(*d));
        }
    }
}
