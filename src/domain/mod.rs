// Domain layer: the store record and the ports its collaborators implement.

pub mod model;
pub mod ports;
