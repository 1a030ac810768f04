// Domain layer: wizard models and the ports the engine talks through.
// Only std/serde here; adapters live under crate::adapters.

pub mod model;
pub mod ports;
