// Domain layer: core models and ports (interfaces). No dependencies on
// adapters or the pipeline itself.

pub mod model;
pub mod ports;
