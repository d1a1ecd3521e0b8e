pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod test_helpers;

pub use config::Config;
pub use error::{Error, Result};
