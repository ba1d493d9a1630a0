pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{age::AgeBreakdown, router::SkillRouter};
pub use domain::model::{Request, SkillRequest, SkillResponse};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{Result, SkillError};
