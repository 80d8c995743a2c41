pub mod config;
pub mod error;
pub mod result;

pub use config::ParseConfig;
pub use error::JwwError;
pub use result::Result;
