// Domain layer: the value model and the handler ports the dispatcher drives.

pub mod model;
pub mod ports;
