pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod export;
pub mod generation;
pub mod global;
pub mod normalizer;
pub mod prompt;
pub mod service;
