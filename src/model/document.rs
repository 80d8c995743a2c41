use serde::Serialize;

use super::block::BlockDef;
use super::entity::Entity;
use super::image::EmbeddedImage;
use super::layer::LayerGroup;

/// Print placement settings from the file header.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PrintSettings {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
    pub rotation_setting: i32,
}

/// Dimension-annotation (sunpou) settings from the file header.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SunpouSettings {
    pub sunpou1: f64,
    pub sunpou2: f64,
    pub sunpou3: f64,
    pub sunpou4: f64,
    pub sunpou5: f64,
    pub dummy: i32,
    pub max_line_width: f64,
}

/// Settings smuggled through CDataMoji metadata records. Fields start
/// empty and are overwritten as assignments are encountered in the
/// entity stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MetadataSettings {
    pub printer_paper_size: String,
    pub draw_bmp_touka: String,
    pub view_direct2d: String,
    pub printer_bmp_zentai: String,
    pub printer_orientation: String,
    pub printer_d2d_bmp: String,
}

impl MetadataSettings {
    /// Routes a recognized side-channel key to its field.
    pub(crate) fn set(&mut self, key: &str, value: String) {
        match key {
            "printer_paper_size" => self.printer_paper_size = value,
            "draw_bmp_touka" => self.draw_bmp_touka = value,
            "view_direct2d" => self.view_direct2d = value,
            "printer_bmp_zentai" => self.printer_bmp_zentai = value,
            "printer_orientation" => self.printer_orientation = value,
            "printer_d2d_bmp" => self.printer_d2d_bmp = value,
            _ => {}
        }
    }
}

/// Fully decoded drawing. Assembled once by the decoder and immutable
/// thereafter; owns every contained entity, layer group, block definition
/// and image blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub version: u32,
    pub memo: String,
    pub paper_size: i32,
    pub write_layer_group: u8,
    pub layer_groups: Vec<LayerGroup>,
    pub entities: Vec<Entity>,
    pub block_defs: Vec<BlockDef>,
    pub embedded_images: Vec<EmbeddedImage>,
    pub print_settings: PrintSettings,
    pub sunpou_settings: SunpouSettings,
    pub metadata_settings: MetadataSettings,
}

impl Document {
    /// Looks up a block definition by its number.
    pub fn block_def(&self, number: i32) -> Option<&BlockDef> {
        self.block_defs.iter().find(|def| def.number == number)
    }

    /// Human-readable paper size for the documented codes.
    pub fn paper_name(&self) -> Option<&'static str> {
        match self.paper_size {
            0 => Some("A0"),
            1 => Some("A1"),
            2 => Some("A2"),
            3 => Some("A3"),
            4 => Some("A4"),
            8 => Some("2A"),
            9 => Some("3A"),
            10 => Some("4A"),
            11 => Some("5A"),
            12 => Some("10m"),
            13 => Some("50m"),
            14 => Some("100m"),
            _ => None,
        }
    }
}
