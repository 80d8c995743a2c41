use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;
use crate::model::image::{EmbeddedImage, ImageFormat};

/// Reads the embedded image blobs that follow the entity stream in
/// version 700 files: `index`, `file_size`, then exactly that many raw
/// bytes, repeated until end of input.
pub fn parse_image_trailer(reader: &mut ByteReader<'_>) -> Result<Vec<EmbeddedImage>> {
    let mut images = Vec::new();
    while reader.remaining() > 0 {
        let at = reader.position();
        let index = reader.read_i32_le()?;
        let file_size = reader.read_i32_le()?;
        if file_size < 0 || file_size as usize > reader.remaining() {
            return Err(JwwError::InvalidImageTrailer {
                offset: at,
                index,
                file_size: i64::from(file_size),
            });
        }
        let data = reader.read_bytes(file_size as usize)?.to_vec();
        let format = ImageFormat::detect(&data);
        images.push(EmbeddedImage {
            index,
            file_size: file_size as u32,
            data,
            format,
        });
    }
    Ok(images)
}
