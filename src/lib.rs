// src/lib.rs

#[macro_use]
pub mod macros;

pub mod assets;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod model;
pub mod progress;
pub mod runner;
pub mod specs;

pub use error::ScrapeError;
