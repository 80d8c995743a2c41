use serde::Serialize;

/// Layer state codes as stored in the file.
pub mod layer_state {
    pub const HIDDEN: i32 = 0;
    pub const VIEW_ONLY: i32 = 1;
    pub const EDITABLE: i32 = 2;
    pub const WRITE: i32 = 3;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub state: i32,
    pub protect: bool,
    pub name: String,
}

/// One of the document's 16 layer groups; holds the drawing scale shared
/// by its 16 layers. `scale` is the denominator (100.0 for 1:100).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerGroup {
    pub state: i32,
    pub write_layer: u8,
    pub scale: f64,
    pub protect: bool,
    pub name: String,
    pub layers: Vec<Layer>,
}
