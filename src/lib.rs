pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_source;
pub mod interactive;
pub mod logging;
pub mod report;
pub mod runner;
