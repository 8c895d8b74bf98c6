pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod server;

pub use error::{Error, Result};
