//! Command-line front end for the extraction pipeline.
//!
//! Three commands share one extraction path: `extract` reads a saved HTML
//! file, `launch` starts a fresh browser, `connect` attaches to a running
//! one over the DevTools protocol.

pub mod browser;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod status;
