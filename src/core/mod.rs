pub mod engine;

pub use crate::domain::model::{Month, Season};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
