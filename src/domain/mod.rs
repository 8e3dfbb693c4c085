// Domain layer: models and ports. Only std, serde and the csv record type.

pub mod model;
pub mod ports;
