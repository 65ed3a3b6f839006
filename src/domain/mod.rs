// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/async-trait when needed.

pub mod model;
pub mod ports;
