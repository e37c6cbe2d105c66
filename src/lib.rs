//! Process setup for the `brewfather-mcp` binary: command line and logging.

pub mod cli;
pub mod logging;
