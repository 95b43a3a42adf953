//! Library components for the ESDF specification generator CLI.

pub mod logging;
pub mod pipeline;
