use log::debug;

use crate::codec::sjis::{read_sjis_len_prefixed, LenPrefix};
use crate::core::config::ParseConfig;
use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;
use crate::jww::version::{read_version, VERSION_IMAGE_TRAILER, VERSION_PEN_WIDTH};
use crate::model::document::{PrintSettings, SunpouSettings};

/// Fixed-layout head of the file, read before the layer table.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: u32,
    pub memo: String,
    pub paper_size: i32,
    pub write_layer_group: u8,
    pub print_settings: PrintSettings,
    pub sunpou_settings: SunpouSettings,
}

/// Reserved head padding whose width changed across format revisions.
/// Sizes are empirical; revise here if a corpus check disagrees.
fn reserved_len(version: u32) -> usize {
    if version >= VERSION_IMAGE_TRAILER {
        96
    } else if version >= VERSION_PEN_WIDTH {
        64
    } else {
        32
    }
}

pub fn parse_header(reader: &mut ByteReader<'_>, config: &ParseConfig) -> Result<Header> {
    let version = read_version(reader)?;
    let memo = read_sjis_len_prefixed(reader, LenPrefix::U16, config.max_string_len)?;

    let at = reader.position();
    let paper_size = reader.read_i32_le()?;
    if !matches!(paper_size, 0..=4 | 8..=14) {
        return Err(JwwError::InvalidHeader {
            offset: at,
            reason: format!("unrecognized paper size code {paper_size}"),
        });
    }

    let at = reader.position();
    let write_layer_group = reader.read_i32_le()?;
    if !(0..=15).contains(&write_layer_group) {
        return Err(JwwError::InvalidHeader {
            offset: at,
            reason: format!("write layer group {write_layer_group} out of range"),
        });
    }

    let print_settings = PrintSettings {
        origin_x: reader.read_f64_le()?,
        origin_y: reader.read_f64_le()?,
        scale: reader.read_f64_le()?,
        rotation_setting: reader.read_i32_le()?,
    };

    let sunpou_settings = SunpouSettings {
        sunpou1: reader.read_f64_le()?,
        sunpou2: reader.read_f64_le()?,
        sunpou3: reader.read_f64_le()?,
        sunpou4: reader.read_f64_le()?,
        sunpou5: reader.read_f64_le()?,
        dummy: reader.read_i32_le()?,
        max_line_width: reader.read_f64_le()?,
    };

    let reserved = reserved_len(version);
    debug!("skipping {reserved} reserved header bytes");
    reader.skip(reserved)?;

    Ok(Header {
        version,
        memo,
        paper_size,
        write_layer_group: write_layer_group as u8,
        print_settings,
        sunpou_settings,
    })
}
