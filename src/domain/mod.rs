// Domain layer: SCOP taxonomy models and ports (interfaces).

pub mod model;
pub mod ports;
