// Domain layer: venue models and the ports the host and upstream plug into.

pub mod model;
pub mod ports;
