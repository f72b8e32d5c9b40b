pub mod blog;
pub mod config;
pub mod error;
pub mod generation;
pub mod server;

pub use error::{Error, Result};
