//! Command implementations

pub mod init;
pub mod inspect;
pub mod process;
pub mod validate;
