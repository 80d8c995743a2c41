/// Hard limits applied while decoding.
///
/// A corrupt file can declare absurd record counts or string lengths; the
/// limits bound work before the reader has proven the bytes exist.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub max_entities: u32,
    pub max_block_defs: u32,
    pub max_string_len: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_entities: 1_000_000,
            max_block_defs: 100_000,
            max_string_len: 64 * 1024,
        }
    }
}
