pub mod block;
pub mod document;
pub mod entity;
pub mod image;
pub mod layer;

pub use block::BlockDef;
pub use document::{Document, MetadataSettings, PrintSettings, SunpouSettings};
pub use entity::{
    Arc, ArcSolid, Block, Entity, EntityBase, Image, Line, Point, Solid, Sunpou, Text,
};
pub use image::{EmbeddedImage, ImageFormat};
pub use layer::{Layer, LayerGroup};
