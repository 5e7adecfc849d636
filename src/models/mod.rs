pub mod document;
pub mod score;
pub mod sets;

pub use document::*;
pub use score::*;
pub use sets::*;
