// Domain layer: demo settings, run reports and the Console/Demo ports.

pub mod model;
pub mod ports;
