mod common;
use bastext::lang::{Dialect, ErrorCode, Machine};
use bastext::mach::Converter;
use common::*;

#[test]
fn test_selection_is_deterministic() {
    for machine in Machine::all() {
        let first = Dialect::for_load_address(machine.load_address).unwrap();
        for _ in 0..3 {
            assert_eq!(Dialect::for_load_address(machine.load_address), Ok(first));
        }
        assert_eq!(first, machine.dialects[0]);
    }
}

#[test]
fn test_load_addresses_are_unique() {
    let machines = Machine::all();
    for (i, a) in machines.iter().enumerate() {
        for b in machines[i + 1..].iter() {
            assert_ne!(a.load_address, b.load_address);
        }
    }
}

#[test]
fn test_each_machine_default() {
    let cases = [
        (0x0401, Dialect::Basic4),
        (0x0801, Dialect::Basic2),
        (0x1001, Dialect::Basic35),
        (0x1201, Dialect::Basic2),
        (0x1C01, Dialect::Basic7),
        (0x4001, Dialect::Basic7),
        (0x132D, Dialect::Basic71),
    ];
    for (address, dialect) in cases.iter() {
        assert_eq!(Dialect::for_load_address(*address), Ok(*dialect));
    }
    for address in [0x0000, 0x0800, 0x0802, 0x9999, 0xFFFF].iter() {
        let e = Dialect::for_load_address(*address).unwrap_err();
        assert!(e.is(ErrorCode::UnrecognizedLoadAddress));
    }
}

#[test]
fn test_pet_disk_commands() {
    let image = Program::new(0x0401).line(10, b"\xd7\"$0\"").end();
    assert_eq!(listing(&image).unwrap(), "10 CATALOG\"$0\"\n");
}

#[test]
fn test_plus_4() {
    let image = Program::new(0x1001)
        .line(10, b"\xeb \xfc A\xb210")
        .line(20, b"\xe7 1,2")
        .end();
    assert_eq!(listing(&image).unwrap(), "10 DO UNTIL A=10\n20 COLOR 1,2\n");
}

#[test]
fn test_c128_graphics_start() {
    let image = Program::new(0x4001)
        .line(10, b"\xde1,1:\xe2,160,100,20")
        .line(20, b"\xfe\x04\"CDE\"")
        .end();
    assert_eq!(
        listing(&image).unwrap(),
        "10 GRAPHIC1,1:CIRCLE,160,100,20\n20 PLAY\"CDE\"\n"
    );
}

#[test]
fn test_basic_71_extension_header_is_skipped() {
    let machine = Machine::for_load_address(0x132D).unwrap();
    let program = Program::new(0x132D).padding(machine.header_len());
    assert_eq!(program.cursor(), 0x1C01);
    let image = program
        .line(10, b"\xfe\x2d A$")
        .line(20, b"\xfe\x25")
        .end();
    assert_eq!(listing(&image).unwrap(), "10 SORT A$\n20 FAST\n");
}

#[test]
fn test_basic_71_truncated_extension_header() {
    let image = Program::new(0x132D).padding(0x100).unterminated();
    let e = listing(&image).unwrap_err();
    assert!(e.is(ErrorCode::UnexpectedData));
}

#[test]
fn test_dialect_override() {
    let image = Program::new(0x0801).line(10, b"\xcc:\xdb").end();
    assert!(listing(&image).unwrap_err().is(ErrorCode::UnknownToken));

    let tfc3 = Converter::new().dialect(Some(Dialect::FinalCartridge3));
    let (out, result) = partial(&tfc3, &image);
    assert_eq!(result.unwrap().dialect, Dialect::FinalCartridge3);
    assert_eq!(out, b"10 OFF:PDIR\n");

    let vic = Converter::new().dialect(Some(Dialect::VicSuper));
    let (out, result) = partial(&vic, &image);
    assert!(result.unwrap_err().is(ErrorCode::UnsupportedDialect));
    assert!(out.is_empty());
}

#[test]
fn test_vic_super_expander() {
    let image = Program::new(0x1201).line(10, b"\xcd2:\xd0 1,0,0 \xa4 100,100").end();
    let vic = Converter::new().dialect(Some(Dialect::VicSuper));
    let (out, result) = partial(&vic, &image);
    result.unwrap();
    assert_eq!(out, b"10 GRAPHIC2:DRAW 1,0,0 TO 100,100\n".to_vec());
}
