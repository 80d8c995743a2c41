use crate::core::config::ParseConfig;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;
use crate::jww::entity::parse_entity_stream;
use crate::jww::header::parse_header;
use crate::jww::image_trailer::parse_image_trailer;
use crate::jww::layer_table::parse_layer_table;
use crate::jww::linker::link_blocks;
use crate::jww::version::VERSION_IMAGE_TRAILER;
use crate::model::document::Document;

/// Staged decoder over a borrowed input buffer. The pipeline runs
/// leaves-first: header, layer table, entity stream, image trailer, block
/// linking, then document assembly.
#[derive(Debug)]
pub struct Decoder<'a> {
    reader: ByteReader<'a>,
    config: ParseConfig,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8], config: ParseConfig) -> Self {
        Self {
            reader: ByteReader::new(bytes),
            config,
        }
    }

    /// Runs the full pipeline and assembles the immutable document.
    pub fn decode(mut self) -> Result<Document> {
        let header = parse_header(&mut self.reader, &self.config)?;
        let layer_groups = parse_layer_table(&mut self.reader, &self.config)?;
        let mut stream = parse_entity_stream(&mut self.reader, header.version, &self.config)?;
        let embedded_images = if header.version >= VERSION_IMAGE_TRAILER {
            parse_image_trailer(&mut self.reader)?
        } else {
            Vec::new()
        };
        link_blocks(&mut stream.block_defs, &stream.block_refs)?;

        Ok(Document {
            version: header.version,
            memo: header.memo,
            paper_size: header.paper_size,
            write_layer_group: header.write_layer_group,
            layer_groups,
            entities: stream.entities,
            block_defs: stream.block_defs,
            embedded_images,
            print_settings: header.print_settings,
            sunpou_settings: header.sunpou_settings,
            metadata_settings: stream.metadata,
        })
    }
}

/// Decodes a complete JWW byte buffer with default limits.
pub fn parse(bytes: &[u8]) -> Result<Document> {
    parse_with_config(bytes, &ParseConfig::default())
}

/// Decodes a complete JWW byte buffer under the given limits.
pub fn parse_with_config(bytes: &[u8], config: &ParseConfig) -> Result<Document> {
    Decoder::new(bytes, config.clone()).decode()
}
