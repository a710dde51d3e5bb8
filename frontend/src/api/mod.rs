mod auth;
pub mod client;
mod destinations;
mod favorites;
pub mod types;

pub use client::*;
pub use types::*;
