// Application layer: capability ports and the relay use case.

pub mod ports;
pub mod relay;
