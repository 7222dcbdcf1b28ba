//! Public configuration and error surface shared by every component.

pub mod config;
mod error;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result, SourceError};
