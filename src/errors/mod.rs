pub mod types;
pub mod classification;

pub use types::CheckerError;
pub use classification::ErrorClassification;
