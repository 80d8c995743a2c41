//! Decoder for JW-CAD `.jww` drawing files.
//!
//! The caller supplies the full file as a byte slice; [`parse`] returns a
//! typed [`Document`] that downstream DXF or JSON emitters consume.

pub mod codec;
pub mod core;
pub mod io;
pub mod json;
pub mod jww;
pub mod model;

pub use crate::core::config::ParseConfig;
pub use crate::core::error::JwwError;
pub use crate::core::result::Result;
pub use crate::json::to_json_string;
pub use crate::jww::decoder::{parse, parse_with_config, Decoder};
pub use crate::model::document::Document;
