pub mod error;
pub mod range;
pub mod selection;
