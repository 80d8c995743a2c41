use crate::codec::sjis::{read_sjis_len_prefixed, LenPrefix};
use crate::core::config::ParseConfig;
use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::io::byte_reader::ByteReader;
use crate::model::layer::{Layer, LayerGroup};

pub const LAYER_GROUP_COUNT: usize = 16;
pub const LAYERS_PER_GROUP: usize = 16;

/// Reads the 16 layer groups that follow the header. Field order within a
/// group is fixed by the file format: group state, write layer, scale,
/// protect, the 16 layers, then the group name.
pub fn parse_layer_table(
    reader: &mut ByteReader<'_>,
    config: &ParseConfig,
) -> Result<Vec<LayerGroup>> {
    let mut groups = Vec::with_capacity(LAYER_GROUP_COUNT);
    for _ in 0..LAYER_GROUP_COUNT {
        groups.push(parse_layer_group(reader, config)?);
    }
    Ok(groups)
}

fn parse_layer_group(reader: &mut ByteReader<'_>, config: &ParseConfig) -> Result<LayerGroup> {
    let state = reader.read_i32_le()?;

    let at = reader.position();
    let write_layer = reader.read_i32_le()?;
    if !(0..=15).contains(&write_layer) {
        return Err(JwwError::InvalidHeader {
            offset: at,
            reason: format!("group write layer {write_layer} out of range"),
        });
    }

    let scale = reader.read_f64_le()?;
    let protect = reader.read_i32_le()? != 0;

    let mut layers = Vec::with_capacity(LAYERS_PER_GROUP);
    for _ in 0..LAYERS_PER_GROUP {
        layers.push(Layer {
            state: reader.read_i32_le()?,
            protect: reader.read_i32_le()? != 0,
            name: read_sjis_len_prefixed(reader, LenPrefix::U8, config.max_string_len)?,
        });
    }
    let name = read_sjis_len_prefixed(reader, LenPrefix::U8, config.max_string_len)?;

    Ok(LayerGroup {
        state,
        write_layer: write_layer as u8,
        scale,
        protect,
        name,
        layers,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_layer_table, LAYERS_PER_GROUP, LAYER_GROUP_COUNT};
    use crate::core::config::ParseConfig;
    use crate::core::error::JwwError;
    use crate::io::byte_reader::ByteReader;
    use crate::model::layer::layer_state;

    fn build_group(write_layer: i32, group_name: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&1i32.to_le_bytes()); // state
        data.extend_from_slice(&write_layer.to_le_bytes());
        data.extend_from_slice(&100.0f64.to_le_bytes());
        data.extend_from_slice(&0i32.to_le_bytes()); // protect
        for index in 0..LAYERS_PER_GROUP {
            data.extend_from_slice(&2i32.to_le_bytes());
            data.extend_from_slice(&i32::from(index as i32 == 0).to_le_bytes());
            let name = format!("L{index}");
            data.push(name.len() as u8);
            data.extend_from_slice(name.as_bytes());
        }
        data.push(group_name.len() as u8);
        data.extend_from_slice(group_name);
        data
    }

    #[test]
    fn parses_sixteen_groups_of_sixteen_layers() {
        let mut data = Vec::new();
        for _ in 0..LAYER_GROUP_COUNT {
            // half-width katakana group name ｱｲ
            data.extend_from_slice(&build_group(3, &[0xB1, 0xB2]));
        }
        let mut reader = ByteReader::new(&data);
        let groups = parse_layer_table(&mut reader, &ParseConfig::default()).unwrap();
        assert_eq!(groups.len(), LAYER_GROUP_COUNT);
        assert_eq!(reader.remaining(), 0);
        for group in &groups {
            assert_eq!(group.layers.len(), LAYERS_PER_GROUP);
            assert_eq!(group.write_layer, 3);
            assert_eq!(group.scale, 100.0);
            assert_eq!(group.name, "\u{FF71}\u{FF72}");
            assert!(group.layers[0].protect);
            assert!(!group.layers[1].protect);
            assert_eq!(group.layers[0].state, layer_state::EDITABLE);
            assert_eq!(group.layers[15].name, "L15");
        }
    }

    #[test]
    fn rejects_out_of_range_write_layer() {
        let data = build_group(16, b"g");
        let mut reader = ByteReader::new(&data);
        assert!(matches!(
            parse_layer_table(&mut reader, &ParseConfig::default()),
            Err(JwwError::InvalidHeader { offset: 4, .. })
        ));
    }

    #[test]
    fn truncated_table_is_unexpected_end() {
        let data = build_group(0, b"g");
        // one full group only; the table needs sixteen
        let mut reader = ByteReader::new(&data);
        assert!(matches!(
            parse_layer_table(&mut reader, &ParseConfig::default()),
            Err(JwwError::UnexpectedEnd { .. })
        ));
    }
}
