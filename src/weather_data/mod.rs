pub mod archive;
pub mod error;
pub mod fetcher;
