pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::StdConsole, CliConfig};
pub use core::engine::{AdvisorEngine, CycleOutcome};
pub use utils::error::{GardenError, Result};
