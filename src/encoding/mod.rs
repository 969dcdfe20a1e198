use std::{fs, io, path::Path};

/// Decode raw ledger bytes by sniffing the byte-order mark.
///
/// Exports are UTF-8 most of the time, but a spreadsheet round trip can
/// produce UTF-16 files. Undecodable sequences are replaced, not rejected;
/// detection is best-effort and stays outside the conversion contract.
pub fn decode(bytes: &[u8]) -> String {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();

    String::from_utf16_lossy(&units)
}

/// Read a ledger file with encoding detection applied.
pub fn read_file(path: &Path) -> io::Result<String> {
    Ok(decode(&fs::read(path)?))
}
