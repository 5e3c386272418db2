pub mod config;
pub mod engine;
pub mod export;
pub mod summary;
pub mod types;
