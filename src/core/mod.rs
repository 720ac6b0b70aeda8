pub mod dispatch;

pub use crate::domain::model::Value;
pub use crate::domain::ports::{DevEnvironment, HandlerContext, SelfCheck};
pub use crate::utils::error::Result;
