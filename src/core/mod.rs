pub mod capture;
pub mod chain;
pub mod engine;

pub use crate::domain::model::ChainOutcome;
pub use crate::domain::ports::Pipeline;
pub use crate::domain::sequence::Sequence;
pub use crate::utils::error::Result;
