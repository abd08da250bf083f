// Domain layer: record model, format enumeration and ports (interfaces).

pub mod format;
pub mod model;
pub mod ports;
