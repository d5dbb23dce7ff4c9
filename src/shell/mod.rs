//! Process execution and host platform facts.

pub mod command;
pub mod platform;

pub use command::{execute, CommandResult};
pub use platform::{host_description, Platform};
