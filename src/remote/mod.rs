//! Portfolio profile store access

pub mod client;

pub use client::{Credentials, ProfileClient};
