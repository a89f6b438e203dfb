//! Reporting — console summary text and chart images.

pub mod charts;
pub mod console;
