//! Command handlers, one per subcommand.

pub mod check;
pub mod download;
pub mod open;
pub mod paths;
