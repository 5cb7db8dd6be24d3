//! Jellyfin "now playing" cards — query playback state and render it as SVG over HTTP.

pub mod card;
pub mod cli;
pub mod config;
pub mod http;
pub mod jellyfin;
pub mod media;
pub mod resolver;
