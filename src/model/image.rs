use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageFormat {
    Unknown,
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl ImageFormat {
    /// Detects the payload format from its leading magic bytes. Byte-exact;
    /// no deeper structure is validated.
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Self::Jpeg
        } else if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Self::Png
        } else if data.starts_with(&[0x42, 0x4D]) {
            Self::Bmp
        } else if data.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            Self::Gif
        } else {
            Self::Unknown
        }
    }
}

/// Raster payload from the trailer of a version 700 file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedImage {
    pub index: i32,
    pub file_size: u32,
    pub data: Vec<u8>,
    pub format: ImageFormat,
}
