pub mod control;
pub mod sjis;

pub use control::{classify, BitmapRef, TextContent};
pub use sjis::{decode_sjis, read_sjis, read_sjis_len_prefixed, LenPrefix};
