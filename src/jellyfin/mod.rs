pub mod client;
pub mod error;
pub mod models;

pub use client::JellyfinClient;
pub use error::{Error, Result};
