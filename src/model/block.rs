use serde::Serialize;

use super::entity::{Entity, EntityBase};

/// A reusable sub-drawing. Insertions reference it by `number`;
/// `is_referenced` is filled in by the linker after the entity stream is
/// consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDef {
    pub base: EntityBase,
    pub number: i32,
    pub is_referenced: bool,
    pub name: String,
    pub entities: Vec<Entity>,
}
