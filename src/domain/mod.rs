// Domain layer: the sequence container, chain operations and ports (interfaces).

pub mod model;
pub mod ops;
pub mod ports;
pub mod sequence;
