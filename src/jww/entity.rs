use crate::codec::control::{classify, TextContent};
use crate::codec::sjis::{read_sjis, read_sjis_len_prefixed, LenPrefix};
use crate::core::config::ParseConfig;
use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;
use crate::jww::version::{VERSION_PEN_WIDTH, VERSION_SXF};
use crate::model::block::BlockDef;
use crate::model::document::MetadataSettings;
use crate::model::entity::{
    Arc, ArcSolid, Block, Entity, EntityBase, Image, Line, Point, Solid, Sunpou, Text,
};

pub const TAG_LINE: &str = "CDataSen";
pub const TAG_ARC: &str = "CDataEnko";
pub const TAG_POINT: &str = "CDataTen";
pub const TAG_TEXT: &str = "CDataMoji";
pub const TAG_SOLID: &str = "CDataSolid";
pub const TAG_BLOCK: &str = "CDataBlock";
pub const TAG_SUNPOU: &str = "CDataSunpou";
pub const TAG_BLOCK_DEF: &str = "CDataBlockDef";
pub const TAG_BLOCK_END: &str = "CDataBlockEnd";

/// Absolute tolerance, in radians, for treating an arc sweep as a full
/// circle. Source values are computed in double precision.
pub const FULL_CIRCLE_EPSILON: f64 = 1e-9;

/// Pen style at and above which a CDataSolid record carries ring geometry
/// instead of four corners.
pub const ARC_SOLID_PEN_STYLE: u8 = 101;
/// Pen color signalling a trailing 32-bit fill color word on solids.
pub const SOLID_COLOR_PEN: u16 = 10;

/// Longest plausible class tag; a larger prefix is mangled framing.
const MAX_TAG_LEN: usize = 63;

/// A block insertion's definition number plus its record offset, kept so
/// the linker can report where a dangling reference was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef {
    pub number: i32,
    pub offset: usize,
}

/// Everything the entity stream produces besides the top-level entities.
#[derive(Debug, Default)]
pub struct EntityStream {
    pub entities: Vec<Entity>,
    pub block_defs: Vec<BlockDef>,
    pub block_refs: Vec<BlockRef>,
    pub metadata: MetadataSettings,
}

/// Consumes tagged records until the end-of-entities marker (a zero tag
/// length), or a clean end of input on a record boundary.
pub fn parse_entity_stream(
    reader: &mut ByteReader<'_>,
    version: u32,
    config: &ParseConfig,
) -> Result<EntityStream> {
    let mut stream = EntityStream::default();
    let mut record_count: u32 = 0;

    loop {
        if reader.remaining() == 0 {
            break;
        }
        let record_at = reader.position();
        let tag = match read_class_tag(reader)? {
            Some(tag) => tag,
            None => break,
        };
        bump_record_count(&mut record_count, config, record_at)?;

        match tag.as_str() {
            TAG_BLOCK_DEF => {
                if stream.block_defs.len() >= config.max_block_defs as usize {
                    return Err(JwwError::LimitExceeded {
                        offset: record_at,
                        what: "block definition",
                    });
                }
                let def =
                    parse_block_def(reader, version, config, &mut stream, record_at, &mut record_count)?;
                stream.block_defs.push(def);
            }
            TAG_BLOCK_END => {
                return Err(JwwError::UnbalancedBlockDefinition { offset: record_at });
            }
            _ => {
                if let Some(entity) =
                    parse_tagged_entity(&tag, reader, version, config, &mut stream, record_at)?
                {
                    stream.entities.push(entity);
                }
            }
        }
    }

    Ok(stream)
}

/// Reads the length-prefixed class tag in front of a record. `None` is the
/// zero-length end-of-entities marker.
fn read_class_tag(reader: &mut ByteReader<'_>) -> Result<Option<String>> {
    let at = reader.position();
    let len = reader.read_u16_le()? as usize;
    if len == 0 {
        return Ok(None);
    }
    if len > MAX_TAG_LEN {
        return Err(JwwError::InvalidTextEncoding { offset: at, len });
    }
    Ok(Some(read_sjis(reader, len)?))
}

fn bump_record_count(count: &mut u32, config: &ParseConfig, at: usize) -> Result<()> {
    *count += 1;
    if *count > config.max_entities {
        return Err(JwwError::LimitExceeded {
            offset: at,
            what: "entity record",
        });
    }
    Ok(())
}

/// Dispatches one tagged record. Returns `None` for records that update
/// document state without emitting an entity (metadata assignments).
fn parse_tagged_entity(
    tag: &str,
    reader: &mut ByteReader<'_>,
    version: u32,
    config: &ParseConfig,
    stream: &mut EntityStream,
    record_at: usize,
) -> Result<Option<Entity>> {
    let entity = match tag {
        TAG_LINE => Some(Entity::Line(decode_line(reader, version)?)),
        TAG_ARC => Some(Entity::Arc(decode_arc(reader, version)?)),
        TAG_POINT => Some(Entity::Point(decode_point(reader, version)?)),
        TAG_TEXT => decode_text_record(reader, version, config, &mut stream.metadata)?,
        TAG_SOLID => Some(decode_solid(reader, version)?),
        TAG_BLOCK => {
            let block = decode_block(reader, version)?;
            stream.block_refs.push(BlockRef {
                number: block.def_number,
                offset: record_at,
            });
            Some(Entity::Block(block))
        }
        TAG_SUNPOU => Some(Entity::Sunpou(decode_sunpou(reader, version, config)?)),
        _ => {
            return Err(JwwError::UnknownEntityTag {
                offset: record_at,
                tag: tag.to_string(),
            })
        }
    };
    Ok(entity)
}

/// Reads the attribute block in front of every entity payload. Files older
/// than version 351 carry no pen width.
pub fn decode_entity_base(reader: &mut ByteReader<'_>, version: u32) -> Result<EntityBase> {
    let group = reader.read_u32_le()?;
    let pen_style = reader.read_u8()?;
    let pen_color = reader.read_u16_le()?;
    let pen_width = if version >= VERSION_PEN_WIDTH {
        reader.read_u16_le()?
    } else {
        0
    };

    let at = reader.position();
    let layer = reader.read_u16_le()?;
    if layer > 15 {
        return Err(JwwError::InvalidEntity {
            offset: at,
            reason: format!("layer {layer} out of range"),
        });
    }

    let at = reader.position();
    let layer_group = reader.read_u16_le()?;
    if layer_group > 15 {
        return Err(JwwError::InvalidEntity {
            offset: at,
            reason: format!("layer group {layer_group} out of range"),
        });
    }

    let flag = reader.read_u16_le()?;

    Ok(EntityBase {
        group,
        pen_style,
        pen_color,
        pen_width,
        layer: layer as u8,
        layer_group: layer_group as u8,
        flag,
    })
}

pub fn decode_line(reader: &mut ByteReader<'_>, version: u32) -> Result<Line> {
    let base = decode_entity_base(reader, version)?;
    Ok(Line {
        base,
        start_x: reader.read_f64_le()?,
        start_y: reader.read_f64_le()?,
        end_x: reader.read_f64_le()?,
        end_y: reader.read_f64_le()?,
    })
}

pub fn decode_arc(reader: &mut ByteReader<'_>, version: u32) -> Result<Arc> {
    let base = decode_entity_base(reader, version)?;
    let center_x = reader.read_f64_le()?;
    let center_y = reader.read_f64_le()?;
    let radius = reader.read_f64_le()?;
    let start_angle = reader.read_f64_le()?;
    let arc_angle = reader.read_f64_le()?;
    let tilt_angle = reader.read_f64_le()?;
    let flatness = reader.read_f64_le()?;
    let is_full_circle = (arc_angle - std::f64::consts::TAU).abs() < FULL_CIRCLE_EPSILON;
    Ok(Arc {
        base,
        center_x,
        center_y,
        radius,
        start_angle,
        arc_angle,
        tilt_angle,
        flatness,
        is_full_circle,
    })
}

pub fn decode_point(reader: &mut ByteReader<'_>, version: u32) -> Result<Point> {
    let base = decode_entity_base(reader, version)?;
    Ok(Point {
        base,
        x: reader.read_f64_le()?,
        y: reader.read_f64_le()?,
        is_temporary: reader.read_u8()? != 0,
        code: reader.read_i32_le()?,
        angle: reader.read_f64_le()?,
        scale: reader.read_f64_le()?,
    })
}

pub fn decode_text(
    reader: &mut ByteReader<'_>,
    version: u32,
    config: &ParseConfig,
) -> Result<Text> {
    let base = decode_entity_base(reader, version)?;
    Ok(Text {
        base,
        start_x: reader.read_f64_le()?,
        start_y: reader.read_f64_le()?,
        end_x: reader.read_f64_le()?,
        end_y: reader.read_f64_le()?,
        text_type: reader.read_i32_le()?,
        size_x: reader.read_f64_le()?,
        size_y: reader.read_f64_le()?,
        spacing: reader.read_f64_le()?,
        angle: reader.read_f64_le()?,
        font_name: read_sjis_len_prefixed(reader, LenPrefix::U8, config.max_string_len)?,
        content: read_sjis_len_prefixed(reader, LenPrefix::U16, config.max_string_len)?,
    })
}

/// Decodes a CDataMoji record and routes it through the content side
/// channel: a `^@BM` reference becomes an Image entity, a recognized `^@`
/// assignment updates the metadata settings and emits nothing, anything
/// else is an ordinary Text entity.
fn decode_text_record(
    reader: &mut ByteReader<'_>,
    version: u32,
    config: &ParseConfig,
    metadata: &mut MetadataSettings,
) -> Result<Option<Entity>> {
    let text = decode_text(reader, version, config)?;
    match classify(&text.content) {
        TextContent::Bitmap(bitmap) => Ok(Some(Entity::Image(Image {
            base: text.base,
            image_path: bitmap.path,
            x: bitmap.x,
            y: bitmap.y,
            width: bitmap.width,
            height: bitmap.height,
            rotation: bitmap.rotation,
        }))),
        TextContent::Setting { key, value } => {
            metadata.set(key, value);
            Ok(None)
        }
        TextContent::Plain => Ok(Some(Entity::Text(text))),
    }
}

/// Decodes a CDataSolid record: four-corner fill below pen style 101,
/// arc/ring fill at and above it. Pen color 10 appends a color word.
pub fn decode_solid(reader: &mut ByteReader<'_>, version: u32) -> Result<Entity> {
    let base = decode_entity_base(reader, version)?;
    if base.pen_style < ARC_SOLID_PEN_STYLE {
        let x1 = reader.read_f64_le()?;
        let y1 = reader.read_f64_le()?;
        let x2 = reader.read_f64_le()?;
        let y2 = reader.read_f64_le()?;
        let x3 = reader.read_f64_le()?;
        let y3 = reader.read_f64_le()?;
        let x4 = reader.read_f64_le()?;
        let y4 = reader.read_f64_le()?;
        let color = read_solid_color(reader, &base)?;
        Ok(Entity::Solid(Solid {
            base,
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            x4,
            y4,
            color,
        }))
    } else {
        let center_x = reader.read_f64_le()?;
        let center_y = reader.read_f64_le()?;
        let radius = reader.read_f64_le()?;
        let flatness = reader.read_f64_le()?;
        let tilt_angle = reader.read_f64_le()?;
        let start_angle = reader.read_f64_le()?;
        let arc_angle = reader.read_f64_le()?;
        let solid_param = reader.read_f64_le()?;
        let color = read_solid_color(reader, &base)?;
        Ok(Entity::ArcSolid(ArcSolid {
            base,
            center_x,
            center_y,
            radius,
            flatness,
            tilt_angle,
            start_angle,
            arc_angle,
            solid_param,
            color,
        }))
    }
}

fn read_solid_color(reader: &mut ByteReader<'_>, base: &EntityBase) -> Result<Option<u32>> {
    if base.pen_color == SOLID_COLOR_PEN {
        Ok(Some(reader.read_u32_le()?))
    } else {
        Ok(None)
    }
}

pub fn decode_block(reader: &mut ByteReader<'_>, version: u32) -> Result<Block> {
    let base = decode_entity_base(reader, version)?;
    Ok(Block {
        base,
        ref_x: reader.read_f64_le()?,
        ref_y: reader.read_f64_le()?,
        scale_x: reader.read_f64_le()?,
        scale_y: reader.read_f64_le()?,
        rotation: reader.read_f64_le()?,
        def_number: reader.read_i32_le()?,
    })
}

/// Decodes a CDataSunpou dimension record: the measured line and its label
/// as nested payloads, plus the SXF extension block from version 420 on.
/// Nested payloads carry their own attribute block but no class tag.
pub fn decode_sunpou(
    reader: &mut ByteReader<'_>,
    version: u32,
    config: &ParseConfig,
) -> Result<Sunpou> {
    let base = decode_entity_base(reader, version)?;
    let line = decode_line(reader, version)?;
    let text = decode_text(reader, version, config)?;

    let (sxf_mode, aux_lines, aux_points) = if version >= VERSION_SXF {
        let mode = reader.read_u16_le()?;
        let mut lines = Vec::with_capacity(2);
        for _ in 0..2 {
            lines.push(decode_line(reader, version)?);
        }
        let mut points = Vec::with_capacity(4);
        for _ in 0..4 {
            points.push(decode_point(reader, version)?);
        }
        (Some(mode), lines, points)
    } else {
        (None, Vec::new(), Vec::new())
    };

    Ok(Sunpou {
        base,
        line,
        text,
        sxf_mode,
        aux_lines,
        aux_points,
    })
}

/// Reads a block definition's own payload, then its nested tagged records
/// until the closing tag. Definitions do not nest; insertions inside one
/// are ordinary entities and register with the linker like any other.
fn parse_block_def(
    reader: &mut ByteReader<'_>,
    version: u32,
    config: &ParseConfig,
    stream: &mut EntityStream,
    def_at: usize,
    record_count: &mut u32,
) -> Result<BlockDef> {
    let base = decode_entity_base(reader, version)?;
    let number = reader.read_i32_le()?;
    let name = read_sjis_len_prefixed(reader, LenPrefix::U8, config.max_string_len)?;

    let mut entities = Vec::new();
    loop {
        if reader.remaining() == 0 {
            return Err(JwwError::UnbalancedBlockDefinition { offset: def_at });
        }
        let record_at = reader.position();
        let tag = match read_class_tag(reader)? {
            Some(tag) => tag,
            None => return Err(JwwError::UnbalancedBlockDefinition { offset: def_at }),
        };
        if tag == TAG_BLOCK_END {
            break;
        }
        if tag == TAG_BLOCK_DEF {
            return Err(JwwError::UnbalancedBlockDefinition { offset: record_at });
        }
        bump_record_count(record_count, config, record_at)?;
        if let Some(entity) = parse_tagged_entity(&tag, reader, version, config, stream, record_at)? {
            entities.push(entity);
        }
    }

    Ok(BlockDef {
        base,
        number,
        is_referenced: false,
        name,
        entities,
    })
}
