use crate::core::error::JwwError;
use crate::core::result::Result;
use crate::jww::entity::BlockRef;
use crate::model::block::BlockDef;

/// Resolves block insertions against the collected definitions. Each
/// matched definition is marked referenced; the first dangling reference
/// aborts the decode. No traversal beyond the direct number lookup.
pub fn link_blocks(block_defs: &mut [BlockDef], block_refs: &[BlockRef]) -> Result<()> {
    for block_ref in block_refs {
        match block_defs
            .iter_mut()
            .find(|def| def.number == block_ref.number)
        {
            Some(def) => def.is_referenced = true,
            None => {
                return Err(JwwError::MissingBlockDefinition {
                    number: block_ref.number,
                    offset: block_ref.offset,
                })
            }
        }
    }
    Ok(())
}
