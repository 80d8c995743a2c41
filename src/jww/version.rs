use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;

/// Leading signature of every JWW file.
pub const SIGNATURE: &[u8; 8] = b"JwwData.";

/// Lowest version writing per-entity pen widths.
pub const VERSION_PEN_WIDTH: u32 = 351;
/// Lowest version writing SXF dimension extension blocks.
pub const VERSION_SXF: u32 = 420;
/// Lowest version carrying an embedded image trailer.
pub const VERSION_IMAGE_TRAILER: u32 = 700;

/// Reads the signature and version word off the front of the input.
pub fn read_version(reader: &mut ByteReader<'_>) -> Result<u32> {
    let at = reader.position();
    let signature = reader.read_bytes(SIGNATURE.len())?;
    if signature != SIGNATURE.as_slice() {
        return Err(JwwError::InvalidHeader {
            offset: at,
            reason: "missing JwwData. signature".to_string(),
        });
    }
    let at = reader.position();
    let version = reader.read_u32_le()?;
    if !(100..=9999).contains(&version) {
        return Err(JwwError::InvalidHeader {
            offset: at,
            reason: format!("implausible format version {version}"),
        });
    }
    Ok(version)
}
