// Domain layer: city models and the ports the core talks to.

pub mod model;
pub mod ports;
