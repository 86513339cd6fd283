//! Domain data: zone configuration, body options, correlation labels

pub mod config;
pub mod labels;
pub mod options;
