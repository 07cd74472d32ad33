// Domain layer: input/result models and the ports to the outside world.

pub mod model;
pub mod ports;
