use serde::Serialize;

/// Attribute block shared by every drawing entity.
///
/// `pen_width` is only meaningful for files of version 351 and later;
/// older files leave it 0. `pen_color` values above the standard 1-9
/// range (SXF extended colors) are preserved raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EntityBase {
    pub group: u32,
    pub pen_style: u8,
    pub pen_color: u16,
    pub pen_width: u16,
    pub layer: u8,
    pub layer_group: u8,
    pub flag: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub base: EntityBase,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arc {
    pub base: EntityBase,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub arc_angle: f64,
    pub tilt_angle: f64,
    /// Ellipse axis ratio; 1.0 for a circular arc.
    pub flatness: f64,
    pub is_full_circle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub base: EntityBase,
    pub x: f64,
    pub y: f64,
    pub is_temporary: bool,
    pub code: i32,
    pub angle: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub base: EntityBase,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub text_type: i32,
    pub size_x: f64,
    pub size_y: f64,
    pub spacing: f64,
    pub angle: f64,
    pub font_name: String,
    pub content: String,
}

/// Four-corner solid fill. `color` is present only when the record's
/// `pen_color` is 10.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solid {
    pub base: EntityBase,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x3: f64,
    pub y3: f64,
    pub x4: f64,
    pub y4: f64,
    pub color: Option<u32>,
}

/// Arc or ring shaped solid fill; a CDataSolid record with `pen_style`
/// of 101 or above.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcSolid {
    pub base: EntityBase,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub flatness: f64,
    pub tilt_angle: f64,
    pub start_angle: f64,
    pub arc_angle: f64,
    pub solid_param: f64,
    pub color: Option<u32>,
}

/// Placement of a block definition, referenced by `def_number`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub base: EntityBase,
    pub ref_x: f64,
    pub ref_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub def_number: i32,
}

/// External raster reference, synthesized from a `^@BM` text record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub base: EntityBase,
    pub image_path: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// Dimension annotation: the measured line, its label, and (version 420
/// and later) the SXF extension block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sunpou {
    pub base: EntityBase,
    pub line: Line,
    pub text: Text,
    pub sxf_mode: Option<u16>,
    pub aux_lines: Vec<Line>,
    pub aux_points: Vec<Point>,
}

/// A drawing entity. The set is closed by the file format; serialized as
/// `{ "type": <variant>, "value": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Entity {
    Line(Line),
    Arc(Arc),
    Point(Point),
    Text(Text),
    Solid(Solid),
    ArcSolid(ArcSolid),
    Block(Block),
    Image(Image),
    Sunpou(Sunpou),
}

impl Entity {
    pub fn base(&self) -> &EntityBase {
        match self {
            Self::Line(e) => &e.base,
            Self::Arc(e) => &e.base,
            Self::Point(e) => &e.base,
            Self::Text(e) => &e.base,
            Self::Solid(e) => &e.base,
            Self::ArcSolid(e) => &e.base,
            Self::Block(e) => &e.base,
            Self::Image(e) => &e.base,
            Self::Sunpou(e) => &e.base,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "Line",
            Self::Arc(_) => "Arc",
            Self::Point(_) => "Point",
            Self::Text(_) => "Text",
            Self::Solid(_) => "Solid",
            Self::ArcSolid(_) => "ArcSolid",
            Self::Block(_) => "Block",
            Self::Image(_) => "Image",
            Self::Sunpou(_) => "Sunpou",
        }
    }
}
