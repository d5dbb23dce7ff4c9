//! Run configuration.
//!
//! There is no configuration file: settings come from platform defaults and
//! the command line (see [`crate::cli::Cli`]).

pub mod settings;

pub use settings::{Settings, DRIVER_LIST_TIMEOUT, PROBE_TIMEOUT};
