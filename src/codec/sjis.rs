use encoding_rs::SHIFT_JIS;
use log::warn;

use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;

/// Width of the length prefix in front of an on-disk string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenPrefix {
    U8,
    U16,
}

/// Decodes a raw Shift-JIS byte run to UTF-8.
///
/// Trailing NUL padding is stripped before decoding. Invalid sequences are
/// replaced with U+FFFD; bad text never aborts the decode of structural
/// data around it.
pub fn decode_sjis(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let (decoded, _, had_errors) = SHIFT_JIS.decode(&bytes[..end]);
    if had_errors {
        warn!("invalid Shift-JIS sequence replaced with U+FFFD");
    }
    decoded.into_owned()
}

/// Reads exactly `n` bytes and decodes them as Shift-JIS.
pub fn read_sjis(reader: &mut ByteReader<'_>, n: usize) -> Result<String> {
    let bytes = reader.read_bytes(n)?;
    Ok(decode_sjis(bytes))
}

/// Reads a length prefix of the given width, then that many Shift-JIS
/// bytes. A prefix above `max_len` is structurally malformed.
pub fn read_sjis_len_prefixed(
    reader: &mut ByteReader<'_>,
    prefix: LenPrefix,
    max_len: usize,
) -> Result<String> {
    let at = reader.position();
    let len = match prefix {
        LenPrefix::U8 => reader.read_u8()? as usize,
        LenPrefix::U16 => reader.read_u16_le()? as usize,
    };
    if len > max_len {
        return Err(JwwError::InvalidTextEncoding { offset: at, len });
    }
    read_sjis(reader, len)
}
