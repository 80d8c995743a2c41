use super::error::JwwError;

pub type Result<T> = std::result::Result<T, JwwError>;
