// Domain layer: request models and ports (interfaces). No dependencies beyond std/serde/reqwest types.

pub mod model;
pub mod ports;
