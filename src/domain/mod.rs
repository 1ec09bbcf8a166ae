// Domain layer: the identifier, the fixed path layout and the storage port.

pub mod model;
pub mod ports;
