// Domain layer: model definitions, typed signatures and the catalog port.

pub mod model;
pub mod ports;
pub mod signature;
