//! CLI command implementations

pub mod init;
pub mod monitor;
pub mod status;
pub mod validate;
