//! API route modules.

pub mod download;
pub mod pages;
pub mod podcast;
