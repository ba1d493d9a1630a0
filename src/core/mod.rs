pub mod age;
pub mod router;

pub use crate::domain::model::{Request, SkillRequest, SkillResponse};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
