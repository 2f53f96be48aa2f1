//! Data models for parsed slips and configuration.

pub mod config;
pub mod slip;
