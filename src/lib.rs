pub mod cli;
pub mod config;
pub mod dataset;
pub mod geo;
pub mod location;
pub mod logging;
pub mod ui;
