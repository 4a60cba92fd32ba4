//! HTTP handlers for the Thing resource and the fallbacks.

pub mod fallback;
pub mod thing;
pub use fallback::*;
pub use thing::*;
