use flash_report::parser::{
    extract_memory_configuration, parse_symbol_line, read_memory_configuration, SymbolKind,
};
use std::io::Write;
use tempfile::NamedTempFile;

const AVR_MAP: &str = "\
Archive member included to satisfy reference by file (symbol)

/usr/lib/gcc/avr/7.3.0/avr5/libgcc.a(_mulsi3.o)

Memory Configuration

Name             Origin             Length             Attributes
text             0x0000000000000000 0x0000000000020000 xr
data             0x0000000000800060 0x000000000000ffa0 rw !x
eeprom           0x0000000000810000 0x0000000000010000 rw !x
*default*        0x0000000000000000 0xffffffffffffffff

Linker script and memory map

.text           0x0000000000000000     0x5a2c
 *(.vectors)
";

#[test]
fn test_memory_configuration_from_map() {
    let block = extract_memory_configuration(AVR_MAP).unwrap();

    assert!(block.starts_with("Name             Origin"));
    assert!(block.contains("eeprom"));
    assert!(block.ends_with("0xffffffffffffffff"));
    assert!(!block.contains("*(.vectors)"));
}

#[test]
fn test_read_memory_configuration_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(AVR_MAP.as_bytes()).unwrap();

    let block = read_memory_configuration(file.path()).unwrap();

    assert_eq!(block, extract_memory_configuration(AVR_MAP));
}

#[test]
fn test_map_without_markers() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b".text 0x0 0x10\n").unwrap();

    assert_eq!(read_memory_configuration(file.path()).unwrap(), None);
}

#[test]
fn test_weak_local_symbol_is_code() {
    let record = parse_symbol_line("00001076 00000088 w _ZN6Stream9timedReadEv").unwrap();

    assert_eq!(record.kind, SymbolKind::Code);
    assert_eq!(record.size, 88);
}

#[test]
fn test_data_symbol_is_other() {
    let record = parse_symbol_line("00009000 00000512 D menuStrings").unwrap();

    assert_eq!(record.kind, SymbolKind::Other);
}
