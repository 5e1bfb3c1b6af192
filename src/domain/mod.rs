// Domain layer: the record shape, report sources and the pipeline ports.

pub mod model;
pub mod ports;
