//! Per-fold best-fitness progression plots for evolutionary run logs.

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod config;
pub mod curve;
pub mod error;
pub mod export;
pub mod reader;
pub mod record;
pub mod ui;
