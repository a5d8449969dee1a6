use crate::domain::sequence::Sequence;
use crate::utils::error::Result;

pub trait Pipeline {
    fn name(&self) -> &str;
    fn extract(&self) -> Result<Sequence<i64>>;
    fn transform(&self, data: Sequence<i64>) -> Result<Sequence<i64>>;
    fn reduce(&self, data: Sequence<i64>) -> Result<i64>;
}
