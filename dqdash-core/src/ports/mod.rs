pub mod source;

pub use source::{CacheKey, CheckSource};
